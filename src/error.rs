//! Error types for the viewer
//!
//! Registry problems are configuration mistakes and are reported when the
//! page controller is built. Conversion and markup errors surface from
//! `transliterate` and are logged by the event handlers.

use thiserror::Error;

/// Invalid scheme registry contents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same identifier appears twice across all groups
    #[error("scheme '{scheme}' is listed more than once (group '{group}')")]
    DuplicateScheme { scheme: String, group: String },

    /// A default scheme is not a member of any group
    #[error("default scheme '{0}' is not in the registry")]
    UnknownDefault(String),

    /// A group with no members
    #[error("scheme group '{0}' is empty")]
    EmptyGroup(String),
}

/// Top-level viewer error type
#[derive(Debug, Clone, Error)]
pub enum ViewerError {
    #[error("invalid scheme registry: {0}")]
    Registry(#[from] RegistryError),

    /// The external converter rejected a text node
    #[error("conversion to '{scheme}' failed: {message}")]
    Conversion { scheme: String, message: String },

    /// Content markup could not be tokenized
    #[error("unreadable content markup: {0}")]
    Markup(String),

    #[error("invalid viewer configuration: {0}")]
    Config(String),

    /// Durable storage refused a write
    #[error("preference storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
