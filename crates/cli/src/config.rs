use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use super::error::Error;
use common::types::Weight;
use shortest_path_core::loader::GraphFormat;

/// Built-in defaults, layered below any user configuration.
const DEFAULT_CONFIG: &str = include_str!("../Config.toml");

/// Picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Config.toml";

/// Environment overrides look like `SHORTEST_PATH__SOLVER__WEIGHT_TYPE=positive`.
pub const ENV_PREFIX: &str = "SHORTEST_PATH";

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeightType {
    /// Dijkstra; all edge weights must be positive.
    Positive,
    /// Bellman-Ford; negative weights allowed, negative cycles detected.
    Negative,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SolverConfig {
    pub weight_type: WeightType,
    pub source: usize,
    pub format: GraphFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub vertices: usize,
    pub density: f64,
    pub min_weight: Weight,
    pub max_weight: Weight,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub solver: SolverConfig,
    pub logging: LoggingConfig,
    pub generator: GeneratorConfig,
}

/// Loads configuration from the built-in defaults, a TOML file and
/// environment variables, in increasing order of precedence.
///
/// An explicit `path` must exist; otherwise `Config.toml` in the working
/// directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let builder =
        ConfigLoader::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at path: {}",
                    path.display()
                )));
            }
            builder.add_source(File::from(path).required(true))
        }
        None => builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
    };

    let s = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
