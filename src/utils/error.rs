use thiserror::Error;

/// Store and infrastructure failures. The trip service never interprets
/// these, it only forwards them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// Errors surfaced by the user and trip services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No valid authenticated identity, or the identity has no stored user.
    #[error("User not logged in")]
    UserNotLoggedIn,
    #[error(transparent)]
    Store(#[from] AppError),
}
