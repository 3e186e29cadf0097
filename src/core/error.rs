use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoofError {
    #[error("No roof defined")]
    NoRoofDefined,

    #[error("Invalid roof dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid zone size: {0} (must be a positive, finite length in meters)")]
    InvalidZoneSize(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RoofError>;
