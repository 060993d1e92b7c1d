//! Renderer configuration
//!
//! Class names and inline styles per node kind, loadable from TOML:
//!
//! ```toml
//! [class_names]
//! code = "mk-code"
//! inlineCode = "inline-code"
//!
//! [styles.blockquote]
//! border-left = "2px solid gray"
//! margin = 0
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use act_core::Style;

use crate::error::Result;
use crate::mdast::NodeKind;

/// Serializable part of the renderer options
///
/// Components are code and are registered on
/// [`RendererOptions`](crate::RendererOptions) instead.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RendererConfig {
    /// CSS class applied to every element produced for a node kind
    #[serde(default)]
    pub class_names: IndexMap<NodeKind, String>,
    /// Inline style applied to every element produced for a node kind
    #[serde(default)]
    pub styles: IndexMap<NodeKind, Style>,
}

impl RendererConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a renderer configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            class_names = config.class_names.len(),
            styles = config.styles.len(),
            "loaded renderer config"
        );
        Ok(config)
    }

    pub fn class_name(mut self, kind: NodeKind, class_name: impl Into<String>) -> Self {
        self.class_names.insert(kind, class_name.into());
        self
    }

    pub fn style(mut self, kind: NodeKind, style: Style) -> Self {
        self.styles.insert(kind, style);
        self
    }
}
