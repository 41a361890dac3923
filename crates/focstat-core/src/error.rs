use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    #[error("External tool error: {0}")]
    Tool(String),
}
