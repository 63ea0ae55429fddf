//! Shared pack fixtures for integration tests
//!
//! A fixture is an in-memory list of `(path, yaml)` entries that can be handed
//! to the engine directly or materialized as a directory, zip, or tar.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use biome_engine::SourceFile;

pub struct PackFixture {
    pub entries: Vec<(String, String)>,
}

impl PackFixture {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, path: &str, yaml: &str) -> Self {
        self.entries.push((path.to_string(), yaml.to_string()));
        self
    }

    /// Example pack: one vanilla-seeded biome and one child overriding water
    pub fn example() -> Self {
        Self::new()
            .with("pack.yml", "id: Example")
            .with(
                "biomes/plains.yml",
                "type: BIOME\nid: custom:plains\nvanilla: minecraft:plains",
            )
            .with(
                "biomes/swamp2.yml",
                "type: BIOME\nid: custom:swampy\nextends: custom:plains\ncolors:\n  water: \"#112233\"",
            )
    }

    /// Entries prefixed with `dir/`
    pub fn nested_in(self, dir: &str) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(path, yaml)| (format!("{}/{}", dir, path), yaml))
                .collect(),
        }
    }

    pub fn source_files(&self) -> Vec<SourceFile> {
        self.entries
            .iter()
            .map(|(path, yaml)| SourceFile::new(path.as_str(), yaml.as_str()))
            .collect()
    }

    /// Write the entries under `root` and return it
    pub fn write_dir(&self, root: &Path) -> PathBuf {
        for (path, yaml) in &self.entries {
            let target = root.join(path);
            fs::create_dir_all(target.parent().unwrap()).unwrap();
            fs::write(&target, yaml).unwrap();
        }
        root.to_path_buf()
    }

    pub fn write_zip(&self, path: &Path) -> PathBuf {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        for (name, yaml) in &self.entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(yaml.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path.to_path_buf()
    }

    pub fn write_tar(&self, path: &Path) -> PathBuf {
        let mut builder = tar::Builder::new(File::create(path).unwrap());
        for (name, yaml) in &self.entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(yaml.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name.as_str(), yaml.as_bytes())
                .unwrap();
        }
        builder.finish().unwrap();
        path.to_path_buf()
    }
}
