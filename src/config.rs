use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one preprocessing run
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Where the JSON dataset is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Number of sample recipes to generate
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seed for the sample generator; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            count: default_count(),
            seed: None,
        }
    }
}

// Default value functions
fn default_output_path() -> PathBuf {
    PathBuf::from("../public/data/recipes.json")
}

fn default_count() -> usize {
    50
}

impl PreprocessConfig {
    /// Load configuration from `preprocess.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Apply command-line values on top of the loaded settings
    pub fn with_overrides(
        mut self,
        count: Option<usize>,
        seed: Option<u64>,
        output_path: Option<PathBuf>,
    ) -> Self {
        if let Some(count) = count {
            self.count = count;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(output_path) = output_path {
            self.output_path = output_path;
        }
        self
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with SMARTMEAL__ prefix
/// 2. The given file, or preprocess.toml in the current directory
/// 3. Default values
///
/// Environment variable format: SMARTMEAL__OUTPUT_PATH
pub fn load_config(file: Option<&Path>) -> Result<PreprocessConfig, ConfigError> {
    let file_source = match file {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("preprocess").required(false),
    };

    let settings = Config::builder()
        .add_source(file_source)
        .add_source(
            Environment::with_prefix("SMARTMEAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
