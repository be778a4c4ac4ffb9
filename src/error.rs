//! Error types for the registry and the application layer.
//!
//! [`RegistryError`] covers the local, recoverable failures of
//! [`crate::domain::registry::WordRegistry`] operations. [`AppError`] wraps it
//! together with the I/O and serialization failures of the surrounding
//! pipeline.

use std::io;

/// Failures reported by registry operations.
///
/// None of these leave the registry in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A new entry could not be allocated for `word`.
    #[error("failed to allocate an entry for '{word}'")]
    AllocationFailure { word: String },

    /// `word` is not present in the registry.
    #[error("word '{word}' not found")]
    NotFound { word: String },

    /// A boundary query was made against an empty registry.
    #[error("registry is empty")]
    EmptyRegistry,

    /// The forward scan ran off the end of the chain without finding a
    /// splice point for `word`.
    #[error("no insertion point found for '{word}'")]
    InsertionPoint { word: String },
}

impl RegistryError {
    pub fn not_found(word: impl Into<String>) -> Self {
        Self::NotFound { word: word.into() }
    }

    pub fn allocation_failure(word: impl Into<String>) -> Self {
        Self::AllocationFailure { word: word.into() }
    }
}

/// Errors surfaced by the counting pipeline and report renderers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns true if the error came from reading or writing a file or stream.
    pub fn is_io(&self) -> bool {
        matches!(self, AppError::Io { .. })
    }
}
