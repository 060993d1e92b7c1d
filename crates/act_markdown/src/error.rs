//! Markdown error types

use std::io;
use thiserror::Error;

/// Errors that can occur when loading documents or renderer configuration
///
/// Rendering itself never fails; these only come from the input boundaries.
#[derive(Error, Debug)]
pub enum MarkdownError {
    /// Malformed mdast JSON
    #[error("Invalid document tree: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed renderer configuration
    #[error("Invalid renderer config: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error when reading a document or config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for act_markdown operations
pub type Result<T> = std::result::Result<T, MarkdownError>;
