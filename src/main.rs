//! Terra biome colors CLI
//!
//! Entry point for the `terra-biome-colors` command-line tool.

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use biome_engine::{builtin_biomes, BiomeAttributes};
use terra_biome_colors::config::{host_config_path, ConfigError, PROJECT_CONFIG_FILE};
use terra_biome_colors::logging::init_logging;
use terra_biome_colors::output::bluemap_json;
use terra_biome_colors::{BiomeTable, EffectiveConfig, Pipeline, PipelineError};

#[derive(Parser)]
#[command(name = "terra-biome-colors")]
#[command(about = "Flatten Terra biome packs into BlueMap and squaremap color tables", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a pack and write renderer outputs
    Convert {
        /// Pack archive (.zip/.tar), pack directory, or a list of YAML files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path to config file (default: ./terra-biome-colors.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(long, short = 'o')]
        out_dir: Option<PathBuf>,

        /// Namespace prefix for biome keys
        #[arg(long, short = 'n')]
        namespace: Option<String>,

        /// Output format (bluemap-json, bluemap-zip, squaremap); repeatable
        #[arg(long = "format", short = 'f')]
        formats: Vec<String>,

        /// Reject duplicate ids and malformed biome documents
        #[arg(long)]
        strict: bool,

        /// Output the run summary in JSON format
        #[arg(long)]
        json: bool,

        /// Log level or tracing filter (RUST_LOG takes precedence)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Resolve a pack and print the table without writing anything
    Inspect {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path to config file (default: ./terra-biome-colors.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Namespace prefix for biome keys
        #[arg(long, short = 'n')]
        namespace: Option<String>,

        /// Print the BlueMap JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in biome defaults
    Defaults {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Path to config file (default: ./terra-biome-colors.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            inputs,
            config,
            out_dir,
            namespace,
            formats,
            strict,
            json,
            log_level,
        } => {
            let overrides = CliOverrides {
                namespace,
                out_dir,
                formats,
                strict,
                log_level,
            };
            run_convert(&inputs, config, overrides, json);
        }
        Commands::Inspect {
            inputs,
            config,
            namespace,
            json,
        } => {
            let overrides = CliOverrides {
                namespace,
                ..Default::default()
            };
            run_inspect(&inputs, config, overrides, json);
        }
        Commands::Defaults { json } => {
            run_defaults(json);
        }
        Commands::Config { config } => {
            run_config(config);
        }
    }
}

/// Flags that override config file values
#[derive(Default)]
struct CliOverrides {
    namespace: Option<String>,
    out_dir: Option<PathBuf>,
    formats: Vec<String>,
    strict: bool,
    log_level: Option<String>,
}

impl CliOverrides {
    fn to_value(&self) -> Option<Value> {
        let mut root = Map::new();

        if let Some(ref namespace) = self.namespace {
            root.insert("namespace".to_string(), json!(namespace));
        }
        if self.strict {
            root.insert(
                "engine".to_string(),
                json!({"duplicate_ids": "reject", "malformed_biomes": "reject"}),
            );
        }

        let mut output = Map::new();
        if let Some(ref dir) = self.out_dir {
            output.insert("dir".to_string(), json!(dir.to_string_lossy()));
        }
        if !self.formats.is_empty() {
            output.insert("formats".to_string(), json!(self.formats));
        }
        if !output.is_empty() {
            root.insert("output".to_string(), Value::Object(output));
        }

        if let Some(ref level) = self.log_level {
            root.insert("log".to_string(), json!({ "level": level }));
        }

        if root.is_empty() {
            None
        } else {
            Some(Value::Object(root))
        }
    }
}

fn load_config(
    config_path: Option<PathBuf>,
    overrides: &CliOverrides,
) -> Result<EffectiveConfig, ConfigError> {
    let project = match config_path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::IoError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path,
        None => PathBuf::from(PROJECT_CONFIG_FILE),
    };

    let host = host_config_path();
    EffectiveConfig::build(host.as_deref(), Some(project.as_path()), overrides.to_value())
}

/// Load config and start a pipeline, exiting on failure
fn setup_pipeline(config_path: Option<PathBuf>, overrides: &CliOverrides) -> Pipeline {
    let settings = match load_config(config_path, overrides).and_then(|c| c.settings()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(PipelineError::from(e).exit_code());
        }
    };

    init_logging(Some(&settings.log.level));

    match Pipeline::new(settings) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run_convert(inputs: &[PathBuf], config_path: Option<PathBuf>, overrides: CliOverrides, json: bool) {
    let started = Instant::now();
    let pipeline = setup_pipeline(config_path, &overrides);

    let (summary, exit_code) = match pipeline.run(inputs) {
        Ok(summary) => (summary, 0),
        Err(e) => {
            let code = e.exit_code();
            if !json {
                eprintln!("Error: {}", e);
            }
            (pipeline.failure_summary(&e, started), code)
        }
    };

    if json {
        match summary.to_json() {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else if exit_code == 0 {
        println!("{}", summary.human_summary);
        for output in &summary.outputs {
            println!("  {:<13} {}", output.format.as_str(), output.path.display());
        }
    }

    process::exit(exit_code);
}

fn run_inspect(inputs: &[PathBuf], config_path: Option<PathBuf>, overrides: CliOverrides, json: bool) {
    let pipeline = setup_pipeline(config_path, &overrides);

    let table = match pipeline.inspect(inputs) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if json {
        match bluemap_json(&table, &pipeline.settings().namespace) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_table(&table);
    }
}

fn print_table(table: &BiomeTable) {
    println!("Pack: {} ({} biomes)", table.config_id, table.len());
    for biome in table.iter() {
        println!("  {:<32} {}", biome.id, describe(&biome.attributes));
    }
}

fn describe(attributes: &BiomeAttributes) -> String {
    let mut parts = Vec::new();
    if let Some(ref c) = attributes.watercolor {
        parts.push(format!("water={}", c));
    }
    if let Some(ref c) = attributes.foliagecolor {
        parts.push(format!("foliage={}", c));
    }
    if let Some(ref c) = attributes.grasscolor {
        parts.push(format!("grass={}", c));
    }
    if let Some(t) = attributes.temperature {
        parts.push(format!("temperature={}", t));
    }
    if let Some(h) = attributes.humidity {
        parts.push(format!("humidity={}", h));
    }
    if parts.is_empty() {
        "(no attributes)".to_string()
    } else {
        parts.join(" ")
    }
}

fn run_defaults(json: bool) {
    if json {
        match defaults_json() {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for (key, biome) in builtin_biomes() {
            println!("{:<36} {}", key, describe(&biome.to_attributes()));
        }
    }
}

fn defaults_json() -> Result<String, serde_json::Error> {
    let mut table = Map::new();
    for (key, biome) in builtin_biomes() {
        table.insert(key.to_string(), serde_json::to_value(biome.to_attributes())?);
    }
    serde_json::to_string_pretty(&Value::Object(table))
}

fn run_config(config_path: Option<PathBuf>) {
    let config = match load_config(config_path, &CliOverrides::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    match config.to_json() {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
