use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No usable text extracted from document: {0}")]
    Extraction(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build phrase matcher: {0}")]
    Pattern(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures the pipeline absorbs per-item rather than surfacing.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::LLMApi(_) | Error::Embedding(_))
    }
}
