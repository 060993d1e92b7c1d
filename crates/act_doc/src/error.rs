//! Doc error types

use act_markdown::MarkdownError;
use thiserror::Error;

/// Errors that can occur when loading doc articles
#[derive(Error, Debug)]
pub enum DocError {
    /// Front-matter is not a YAML mapping of the expected fields
    #[error("Invalid front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// The document itself could not be loaded
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
}

/// Result type for act_doc operations
pub type Result<T> = std::result::Result<T, DocError>;
