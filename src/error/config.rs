use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    OpenFileError {
        path:   String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path:   String,
        source: toml::de::Error,
    },

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
