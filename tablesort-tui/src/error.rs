use thiserror::Error;

/// App error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}
