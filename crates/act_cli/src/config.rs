//! act configuration file handling
//!
//! `act.toml` holds the renderer tables at the top level and the page
//! transition timing under `[transition]`:
//!
//! ```toml
//! [class_names]
//! paragraph = "paragraph"
//!
//! [styles.code]
//! fontFamily = "monospace"
//!
//! [transition]
//! duration = 300
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use act_curve::SlideTransitionConfig;
use act_markdown::RendererConfig;

/// File looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "act.toml";

/// Contents of `act.toml`
#[derive(Debug, Default, Deserialize)]
pub struct ActConfig {
    #[serde(flatten)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub transition: SlideTransitionConfig,
}

impl ActConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ActConfig = toml::from_str(content)?;
        let duration = config.transition.duration;
        if duration.is_nan() || duration <= 0.0 {
            anyhow::bail!("transition duration must be positive, got {}", duration);
        }
        Ok(config)
    }

    /// Load an explicit config file, or `act.toml` if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
