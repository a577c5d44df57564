use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to fetch doctors data: {0}")]
    Fetch(String),

    #[error("Failed to fetch doctors data: server responded with status {0}")]
    Status(u16),

    #[error("Invalid data format received: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
