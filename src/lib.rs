//! Terra biome colors
//!
//! Converts a Terra world-generation pack into the per-biome color and
//! climate tables that BlueMap and squaremap use to render custom biomes.
//! Inheritance resolution lives in the `biome-engine` crate; this crate
//! handles inputs, configuration, renderer outputs and the CLI pipeline.

pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod worker;

pub use biome_engine::{BiomeTable, EngineError, EngineOptions, ResolvedBiome, SourceFile};
pub use config::{EffectiveConfig, OutputFormat, Settings};
pub use pipeline::{Pipeline, PipelineError, PipelineResult};
pub use summary::RunSummary;
