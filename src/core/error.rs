use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroundfallError {
    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown population density template: {0}")]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Body deserialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GroundfallError>;
