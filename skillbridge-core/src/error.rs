#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
