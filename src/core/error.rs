use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaddockError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sprite table error for '{species}': {reason}")]
    SpriteTable { species: String, reason: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PaddockError>;
