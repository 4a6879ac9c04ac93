use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgctlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("{0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, PgctlError>;
