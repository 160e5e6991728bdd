//! Error types for ctxmem-core.

use thiserror::Error;

/// Result type alias using ctxmem-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for ctxmem operations
#[derive(Error, Debug)]
pub enum Error {
    // Persistence errors
    #[cfg(feature = "db")]
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Unsupported storage version {found} (this build understands up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    // Editor errors
    #[error("No active editor")]
    NoActiveTarget,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error comes from the persistence layer.
    pub fn is_persistence(&self) -> bool {
        match self {
            #[cfg(feature = "db")]
            Self::Database(_) => true,
            Self::LockPoisoned
            | Self::UnsupportedVersion { .. }
            | Self::Io(_)
            | Self::Serialization(_) => true,
            Self::NoActiveTarget => false,
        }
    }
}
