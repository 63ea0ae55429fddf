//! Archive readers
//!
//! Zip and tar archives are read fully into memory; only file entries that
//! pass the YAML filter are kept. Entry paths are used as stored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use biome_engine::SourceFile;
use tracing::debug;

use super::filter::YamlFilter;
use super::InputError;

/// Largest buffer reserved up front from an entry's declared size
const MAX_PREALLOC: u64 = 1 << 20;

/// Declared entry sizes come from the archive header and are not trusted.
fn capacity_hint(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

/// Supported archive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    Tar,
}

impl ArchiveKind {
    /// Detect an archive from its file name
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "zip" => Some(ArchiveKind::Zip),
            "tar" => Some(ArchiveKind::Tar),
            _ => None,
        }
    }
}

/// Read every YAML entry of an archive
pub fn read_archive(
    path: &Path,
    kind: ArchiveKind,
    filter: &YamlFilter,
) -> Result<Vec<SourceFile>, InputError> {
    let file = File::open(path)?;
    match kind {
        ArchiveKind::Zip => read_zip(file, filter),
        ArchiveKind::Tar => read_tar(file, filter),
    }
}

fn read_zip(file: File, filter: &YamlFilter) -> Result<Vec<SourceFile>, InputError> {
    let mut archive = zip::ZipArchive::new(file)?;
    let mut files = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !filter.matches(&name) {
            debug!(entry = %name, "skipping non-YAML zip entry");
            continue;
        }

        let mut bytes = Vec::with_capacity(capacity_hint(entry.size()));
        entry.read_to_end(&mut bytes)?;
        files.push(SourceFile::new(name, bytes));
    }

    Ok(files)
}

fn read_tar(file: File, filter: &YamlFilter) -> Result<Vec<SourceFile>, InputError> {
    let mut archive = tar::Archive::new(file);
    let mut files = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path()?.to_string_lossy().replace('\\', "/");
        if !filter.matches(&name) {
            debug!(entry = %name, "skipping non-YAML tar entry");
            continue;
        }

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        files.push(SourceFile::new(name, bytes));
    }

    Ok(files)
}
