use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamarthError {
    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
