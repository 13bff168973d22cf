//! Error types shared across the workspace.
//!
//! One enum per subsystem, wrapped by [`ColumnaError`] at the top level.
//! Every failure in this system is user-recoverable; there is no fatal
//! error class.

mod request_error;
mod store_error;
mod validation_error;

pub use request_error::RequestError;
pub use store_error::StoreError;
pub use validation_error::ValidationError;

/// Result type alias used throughout the workspace.
pub type ColumnaResult<T> = Result<T, ColumnaError>;

/// Top-level error wrapping all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ColumnaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
