use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Ticker task failed: {0}")]
    TickerJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
