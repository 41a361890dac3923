use crate::error::Error;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Folders scanned when none are passed on the command line.
    #[serde(default)]
    pub root_paths: Vec<String>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub exiftool: ExifToolConfig,
}

/// Settings for the external metadata tool used when the embedded EXIF
/// block has no usable focal length.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExifToolConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the file path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ExifToolConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ExifToolConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            args: default_args(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_paths: Vec::new(),
            ignore_patterns: Vec::new(),
            language: default_language(),
            exiftool: ExifToolConfig::default(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_program() -> String {
    "exiftool".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-FocalLength".to_string(), "-s3".to_string()]
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Reads `Config.toml` from the working directory if present, then overlays
/// `FOCSTAT__*` environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("FOCSTAT")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("root_paths")
                .with_list_parse_key("ignore_patterns")
                .with_list_parse_key("exiftool.args")
                .try_parsing(true),
        );
    build_configuration(builder)
}

fn build_configuration(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, Error> {
    let config = builder.build()?.try_deserialize::<AppConfig>()?;
    Ok(config)
}
