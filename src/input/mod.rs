//! Input collection
//!
//! Turns command-line paths into the YAML entries the engine consumes. A
//! single file must be an archive; a directory, or several paths, are treated
//! as an already-expanded file list.

mod archive;
mod filter;

pub use archive::{read_archive, ArchiveKind};
pub use filter::YamlFilter;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use biome_engine::SourceFile;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Errors for input collection
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("glob pattern error: {0}")]
    Glob(#[from] globset::Error),
}

/// Collect YAML entries from the given paths
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<SourceFile>, InputError> {
    let filter = YamlFilter::new()?;

    let files = match paths {
        [] => return Err(InputError::InvalidInput("no files".to_string())),
        [single] if single.is_file() => {
            let kind = ArchiveKind::detect(single).ok_or_else(|| {
                InputError::InvalidInput(format!("not an archive: {}", single.display()))
            })?;
            read_archive(single, kind, &filter)?
        }
        many => {
            let mut files = Vec::new();
            for path in many {
                collect_path(path, &filter, &mut files)?;
            }
            files
        }
    };

    if files.is_empty() {
        return Err(InputError::InvalidInput("no YAML files found".to_string()));
    }

    info!(entries = files.len(), "collected YAML entries");
    Ok(files)
}

fn collect_path(
    path: &Path,
    filter: &YamlFilter,
    files: &mut Vec<SourceFile>,
) -> Result<(), InputError> {
    if path.is_dir() {
        walk_directory(path, filter, files)
    } else if path.is_file() {
        let name = path.to_string_lossy().replace('\\', "/");
        if filter.matches(&name) {
            files.push(SourceFile::new(name, fs::read(path)?));
        } else {
            debug!(path = %path.display(), "skipping non-YAML file");
        }
        Ok(())
    } else {
        Err(InputError::NotFound(path.to_path_buf()))
    }
}

/// Walk a directory; entry paths keep the directory's own name as first
/// segment so several directories never collide.
fn walk_directory(
    root: &Path,
    filter: &YamlFilter,
    files: &mut Vec<SourceFile>,
) -> Result<(), InputError> {
    let base = root.parent().unwrap_or(root);

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry.path().strip_prefix(base).unwrap_or(entry.path());
        let name = rel_path.to_string_lossy().replace('\\', "/");
        if !filter.matches(&name) {
            continue;
        }

        files.push(SourceFile::new(name, fs::read(entry.path())?));
    }

    Ok(())
}
