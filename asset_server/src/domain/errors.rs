// Domain-level errors for static asset lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("404 - Not Found")]
    NotFound,

    // Request path tried to climb out of the static root.
    #[error("forbidden")]
    Forbidden,

    #[error("failed to read asset: {0}")]
    Io(#[from] std::io::Error),
}
