//! Vivant configuration file handling
//!
//! A site directory may contain a `vivant.toml`:
//!
//! ```toml
//! [engine]
//! scroll_threshold = 50.0
//!
//! [site]
//! content = "content.toml"
//! output = "dist/index.html"
//! viewport_width = 1440
//! ```
//!
//! Every key is optional. Without the file the built-in content and engine
//! defaults are used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vivant_core::config::EngineConfig;
use vivant_page::content::SiteContent;

pub const CONFIG_FILE: &str = "vivant.toml";

/// Contents of `vivant.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VivantConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub site: SiteConfig,
    /// Directory the file was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub root: PathBuf,
}

/// Where content comes from and where output goes
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Content TOML; built-in content when absent
    #[serde(default)]
    pub content: Option<PathBuf>,
    /// Rendered HTML path; stdout when absent
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn default_viewport_height() -> f32 {
    800.0
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: None,
            output: None,
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl VivantConfig {
    /// Load `vivant.toml` from a directory, falling back to defaults
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: VivantConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            debug!("Loaded {}", config_path.display());
            config
        } else {
            info!(
                "No {} in {}, using defaults",
                CONFIG_FILE,
                path.display()
            );
            VivantConfig::default()
        };

        config
            .engine
            .validate()
            .with_context(|| format!("Invalid [engine] settings in {}", config_path.display()))?;
        config.root = path.to_path_buf();
        Ok(config)
    }

    /// Site content named by the config, or the built-in content
    pub fn load_content(&self) -> Result<SiteContent> {
        let Some(relative) = &self.site.content else {
            return Ok(SiteContent::lavie());
        };

        let content_path = self.root.join(relative);
        let text = fs::read_to_string(&content_path)
            .with_context(|| format!("Failed to read {}", content_path.display()))?;
        SiteContent::from_toml_str(&text)
            .with_context(|| format!("Failed to parse {}", content_path.display()))
    }

    /// Output path resolved against the config directory
    pub fn output_path(&self) -> Option<PathBuf> {
        self.site.output.as_ref().map(|output| self.root.join(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: VivantConfig = toml::from_str(
            r#"
[engine]
scroll_threshold = 50.0

[site]
output = "dist/index.html"
"#,
        )
        .unwrap();

        assert_eq!(config.engine.scroll_threshold, 50.0);
        assert_eq!(config.engine.stagger_step_ms, 150);
        assert_eq!(config.site.viewport_width, 1280.0);
        assert_eq!(config.site.output, Some(PathBuf::from("dist/index.html")));
        assert!(config.site.content.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = std::env::temp_dir().join("vivant-cli-no-config");
        let config = VivantConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.load_content().unwrap(), SiteContent::lavie());
        assert_eq!(config.output_path(), None);
    }
}
