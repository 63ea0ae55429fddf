//! Pipeline orchestration
//!
//! A conversion run:
//! - Collect YAML entries from the inputs
//! - Resolve them on the engine worker
//! - Write the selected renderer outputs
//! - Emit run_summary.json next to the outputs
//!
//! A run that fails leaves no output files behind.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use biome_engine::{BiomeTable, EngineError};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, Settings};
use crate::input::{collect_inputs, InputError};
use crate::output::{remove_outputs, write_outputs, OutputError};
use crate::summary::RunSummary;
use crate::worker::{EngineWorker, WorkerError};

/// File name of the run summary written into the output directory
pub const RUN_SUMMARY_FILE: &str = "run_summary.json";

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Worker(#[from] WorkerError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) => 1,
            PipelineError::Input(InputError::InvalidInput(_)) => 2,
            PipelineError::Input(_) => 1,
            PipelineError::Worker(WorkerError::Engine(e)) => engine_exit_code(e),
            PipelineError::Worker(_) => 40,
            PipelineError::Output(_) => 30,
            PipelineError::Io(_) => 1,
            PipelineError::Serialization(_) => 1,
        }
    }
}

fn engine_exit_code(error: &EngineError) -> i32 {
    match error {
        EngineError::InvalidInput(_) => 2,
        EngineError::NoPackManifest | EngineError::MultiplePackManifests { .. } => 10,
        EngineError::MissingConfigId { .. } => 11,
        EngineError::UnresolvedBiomeReference { .. } => 20,
        EngineError::CyclicInheritance { .. } => 21,
        EngineError::DuplicateBiomeId { .. } | EngineError::MalformedBiome { .. } => 22,
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Pipeline execution context
pub struct Pipeline {
    settings: Settings,
    worker: EngineWorker,
}

impl Pipeline {
    /// Create a pipeline and start its engine worker
    pub fn new(settings: Settings) -> PipelineResult<Self> {
        let worker = EngineWorker::spawn()?;
        Ok(Self { settings, worker })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the inputs without writing anything
    pub fn inspect(&self, inputs: &[PathBuf]) -> PipelineResult<BiomeTable> {
        let files = collect_inputs(inputs)?;
        let table = self.worker.convert(files, self.settings.engine)?;
        Ok(table)
    }

    /// Full conversion: resolve, write outputs, write the run summary
    pub fn run(&self, inputs: &[PathBuf]) -> PipelineResult<RunSummary> {
        let started = Instant::now();

        let table = self.inspect(inputs)?;
        let outputs = write_outputs(&table, &self.settings)?;

        let summary = RunSummary::succeeded(
            &table.config_id,
            &self.settings.namespace,
            table.len(),
            outputs,
            started.elapsed().as_millis() as u64,
        );

        let summary_path = self.summary_path();
        if let Err(e) = summary.write_to_file(&summary_path) {
            remove_outputs(&summary.outputs);
            return Err(e.into());
        }
        info!(path = %summary_path.display(), "{}", summary.human_summary);

        Ok(summary)
    }

    /// Summary for a run that failed with `error`
    pub fn failure_summary(&self, error: &PipelineError, started: Instant) -> RunSummary {
        RunSummary::failed(
            &self.settings.namespace,
            error.to_string(),
            error.exit_code(),
            started.elapsed().as_millis() as u64,
        )
    }

    fn summary_path(&self) -> PathBuf {
        self.settings.output.dir.join(RUN_SUMMARY_FILE)
    }
}
