//! Error types for kosh
//!
//! All modules use `KoshResult<T>` as their return type. Read-path
//! helpers on [`crate::storage::Storage`] intentionally do NOT return
//! these errors; see the fail-soft read policy documented there.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kosh operations
pub type KoshResult<T> = Result<T, KoshError>;

/// All errors that can occur in kosh
#[derive(Error, Debug)]
pub enum KoshError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown config key: {0}")]
    ConfigKeyUnknown(String),

    // Vault / store errors
    #[error("Vault error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Account errors
    #[error("No account found in this vault")]
    NotRegistered,

    #[error("An account already exists in this vault")]
    AlreadyRegistered,

    #[error("Incorrect email or password")]
    BadCredentials,

    // Onboarding errors
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Document not attached: {0}")]
    DocumentMissing(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl KoshError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotRegistered => Some("Run: kosh signup"),
            Self::AlreadyRegistered => Some("Run: kosh reset to start over"),
            Self::DocumentMissing(_) => Some("Run: kosh documents attach"),
            _ => None,
        }
    }
}
