//! Configuration merge system
//!
//! Settings are merged from four layers, later layers winning:
//! 1. Built-in defaults
//! 2. Host config (`$XDG_CONFIG_HOME/terra-biome-colors/config.toml`)
//! 3. Project config (`--config`, or `./terra-biome-colors.toml`)
//! 4. CLI flags

mod defaults;
mod effective;
mod merge;
mod settings;

pub use defaults::BuiltinDefaults;
pub use effective::{host_config_path, ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig};
pub use merge::{deep_merge, merge_layers};
pub use settings::{OutputFormat, Settings, PROJECT_CONFIG_FILE};
