//! End-to-end pipeline tests
//!
//! Packs are written to disk as directories or archives, converted through
//! the pipeline, and the renderer files are read back.

mod fixtures;

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use fixtures::PackFixture;
use serde_json::Value;
use tempfile::TempDir;
use terra_biome_colors::config::{BuiltinDefaults, OutputFormat};
use terra_biome_colors::input::collect_inputs;
use terra_biome_colors::pipeline::RUN_SUMMARY_FILE;
use terra_biome_colors::summary::RunStatus;
use terra_biome_colors::{EngineError, Pipeline, PipelineError, RunSummary, Settings};

fn settings(out: &Path) -> Settings {
    let mut settings = Settings::from_value(&BuiltinDefaults::default().to_value()).unwrap();
    settings.output.dir = out.to_path_buf();
    settings
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_zip_pack_to_all_formats() {
    let temp = TempDir::new().unwrap();
    let archive = PackFixture::example().write_zip(&temp.path().join("example.zip"));
    let out = temp.path().join("out");

    let pipeline = Pipeline::new(settings(&out)).unwrap();
    let summary = pipeline.run(&[archive]).unwrap();

    assert_eq!(summary.status, RunStatus::Success);
    assert_eq!(summary.biome_count, 2);

    let json = read_json(&out.join("biomes.json"));
    let expected = serde_json::json!({
        "terra:example/example/custom:plains": {
            "watercolor": "#3f76e4",
            "temperature": 0.8,
            "humidity": 0.4
        },
        "terra:example/example/custom:swampy": {
            "watercolor": "#3f76e4",
            "temperature": 0.8,
            "humidity": 0.4
        }
    });
    assert_eq!(json, expected);

    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "terra:example/example/custom:plains",
            "terra:example/example/custom:swampy"
        ]
    );

    let mut pack = zip::ZipArchive::new(File::open(out.join("example.zip")).unwrap()).unwrap();
    let mut packed = String::new();
    pack.by_name("assets/terra/biomes.json")
        .unwrap()
        .read_to_string(&mut packed)
        .unwrap();
    assert_eq!(packed, fs::read_to_string(out.join("biomes.json")).unwrap());

    let yaml: serde_yaml::Value = serde_yaml::from_str(
        &fs::read_to_string(out.join("squaremap-color-overrides.yml")).unwrap(),
    )
    .unwrap();
    let biomes = &yaml["color-overrides"]["biomes"];
    assert_eq!(
        biomes["water"]["terra:example/example/custom:swampy"].as_str(),
        Some("#3f76e4")
    );
    assert!(biomes["grass"].as_mapping().unwrap().is_empty());
}

#[test]
fn test_tar_and_directory_inputs_agree() {
    let temp = TempDir::new().unwrap();
    let fixture = PackFixture::example().with("notes/readme.txt", "not yaml");

    let tar = fixture.write_tar(&temp.path().join("example.tar"));
    let dir = fixture.write_dir(&temp.path().join("example"));

    let from_tar = collect_inputs(&[tar]).unwrap();
    let from_dir = collect_inputs(&[dir]).unwrap();
    assert_eq!(from_tar.len(), 3);
    assert_eq!(from_dir.len(), 3);

    let pipeline = Pipeline::new(settings(&temp.path().join("out"))).unwrap();
    let a = pipeline.inspect(&[temp.path().join("example.tar")]).unwrap();
    let b = pipeline.inspect(&[temp.path().join("example")]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_custom_namespace_and_single_format() {
    let temp = TempDir::new().unwrap();
    let dir = PackFixture::example().write_dir(&temp.path().join("pack"));
    let out = temp.path().join("out");

    let mut settings = settings(&out);
    settings.namespace = "maps".to_string();
    settings.output.formats = vec![OutputFormat::BluemapZip];

    let summary = Pipeline::new(settings).unwrap().run(&[dir]).unwrap();

    assert_eq!(summary.outputs.len(), 1);
    assert!(!out.join("biomes.json").exists());

    let mut pack = zip::ZipArchive::new(File::open(out.join("example.zip")).unwrap()).unwrap();
    let mut packed = String::new();
    pack.by_name("assets/maps/biomes.json")
        .unwrap()
        .read_to_string(&mut packed)
        .unwrap();
    assert!(packed.contains("\"maps:example/example/custom:plains\""));
}

#[test]
fn test_run_summary_on_disk() {
    let temp = TempDir::new().unwrap();
    let dir = PackFixture::example().write_dir(&temp.path().join("pack"));
    let out = temp.path().join("out");

    let summary = Pipeline::new(settings(&out)).unwrap().run(&[dir]).unwrap();
    let on_disk = RunSummary::from_file(&out.join(RUN_SUMMARY_FILE)).unwrap();

    assert_eq!(on_disk.config_id.as_deref(), Some("example"));
    assert_eq!(on_disk.outputs, summary.outputs);
    for output in &on_disk.outputs {
        assert!(output.path.exists());
        assert_eq!(output.sha256.len(), 64);
    }
}

#[test]
fn test_engine_failure_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let dir = PackFixture::new()
        .with("pack.yml", "id: p")
        .with("a.yml", "type: BIOME\nid: a\nextends: b")
        .with("b.yml", "type: BIOME\nid: b\nextends: a")
        .write_dir(&temp.path().join("pack"));
    let out = temp.path().join("out");

    let err = Pipeline::new(settings(&out)).unwrap().run(&[dir]).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Worker(terra_biome_colors::worker::WorkerError::Engine(
            EngineError::CyclicInheritance { .. }
        ))
    ));
    assert_eq!(err.exit_code(), 21);
    assert!(!out.exists());
}

#[test]
fn test_single_plain_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("pack.yml");
    fs::write(&file, "id: p").unwrap();

    let err = Pipeline::new(settings(&temp.path().join("out")))
        .unwrap()
        .run(&[file])
        .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
