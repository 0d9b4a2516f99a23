use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Failure taxonomy surfaced to the embedding UI.
///
/// None of these are fatal: the caller stays interactive and decides
/// what to show. Nothing is retried here.
#[derive(Debug, ThisError)]
pub enum AppError {
    /// Storage unreachable at startup.
    #[error("error connecting to database: {0}")]
    Connection(#[source] SqlxError),

    /// Unknown username and wrong password collapse into this single
    /// value so a caller cannot distinguish the two cases.
    #[error("invalid username or password")]
    Authentication,

    /// Input rejected before any write.
    #[error("{0}")]
    Validation(String),

    /// Storage failure mid-operation, propagated unhandled.
    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
