//! Renderer outputs
//!
//! Writes the resolved table in the formats the map renderers consume and
//! records a digest for every file written.

mod bluemap;
mod squaremap;

pub use bluemap::{bluemap_json, bluemap_resource_pack, resource_pack_entry};
pub use squaremap::squaremap_yaml;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use biome_engine::BiomeTable;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::{OutputFormat, Settings};

/// File name of the BlueMap biome map
pub const BLUEMAP_JSON_FILE: &str = "biomes.json";

/// File name of the squaremap overrides document
pub const SQUAREMAP_FILE: &str = "squaremap-color-overrides.yml";

/// Errors for output writing
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Composite key renderers use to identify a Terra biome.
///
/// The pack id appears twice; renderers expect exactly this shape.
pub fn biome_key(namespace: &str, config_id: &str, biome_id: &str) -> String {
    format!("{}:{}/{}/{}", namespace, config_id, config_id, biome_id)
}

/// A file written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrittenOutput {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub sha256: String,
    pub bytes: u64,
}

/// Render one format to bytes, returning the file name and contents
pub fn render(
    table: &BiomeTable,
    namespace: &str,
    format: OutputFormat,
) -> Result<(String, Vec<u8>), OutputError> {
    let rendered = match format {
        OutputFormat::BluemapJson => (
            BLUEMAP_JSON_FILE.to_string(),
            bluemap_json(table, namespace)?.into_bytes(),
        ),
        OutputFormat::BluemapZip => {
            let json = bluemap_json(table, namespace)?;
            (
                format!("{}.zip", table.config_id),
                bluemap_resource_pack(&json, namespace)?,
            )
        }
        OutputFormat::Squaremap => (
            SQUAREMAP_FILE.to_string(),
            squaremap_yaml(table, namespace)?.into_bytes(),
        ),
    };
    Ok(rendered)
}

/// Write every selected format into the configured output directory
pub fn write_outputs(
    table: &BiomeTable,
    settings: &Settings,
) -> Result<Vec<WrittenOutput>, OutputError> {
    write_outputs_to(
        table,
        &settings.namespace,
        &settings.output.formats,
        &settings.output.dir,
    )
}

/// Write the given formats into `dir`, each format at most once.
///
/// Every format is rendered before anything touches the disk. If a write
/// fails, files already written by this call are removed again.
pub fn write_outputs_to(
    table: &BiomeTable,
    namespace: &str,
    formats: &[OutputFormat],
    dir: &Path,
) -> Result<Vec<WrittenOutput>, OutputError> {
    let mut rendered: Vec<(OutputFormat, String, Vec<u8>)> = Vec::new();
    for &format in formats {
        if rendered.iter().any(|(f, _, _)| *f == format) {
            continue;
        }
        let (file_name, contents) = render(table, namespace, format)?;
        rendered.push((format, file_name, contents));
    }

    fs::create_dir_all(dir)?;

    let mut written: Vec<WrittenOutput> = Vec::with_capacity(rendered.len());
    for (format, file_name, contents) in rendered {
        let path = dir.join(file_name);
        if let Err(e) = fs::write(&path, &contents) {
            remove_outputs(&written);
            return Err(e.into());
        }
        info!(format = %format, path = %path.display(), bytes = contents.len(), "wrote output");

        written.push(WrittenOutput {
            format,
            path,
            sha256: hex::encode(Sha256::digest(&contents)),
            bytes: contents.len() as u64,
        });
    }

    Ok(written)
}

/// Best-effort removal of files written by [`write_outputs_to`]
pub fn remove_outputs(outputs: &[WrittenOutput]) {
    for output in outputs {
        if let Err(e) = fs::remove_file(&output.path) {
            warn!(path = %output.path.display(), error = %e, "failed to remove partial output");
        }
    }
}
