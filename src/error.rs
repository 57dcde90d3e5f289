use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown creature kind: {0}")]
    UnknownCreatureKind(String),

    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
