//! Site configuration file (beranda.toml).

use std::fs;
use std::path::{Path, PathBuf};

use beranda_content::SiteMetadata;
use serde::Deserialize;

use crate::builder::BuildConfig;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
}

/// Configuration file structure (beranda.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteMetadata,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct ContentSection {
    #[serde(default = "default_content_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
    /// Directory of files copied into the output as-is
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Paths to CSS stylesheets to include
    pub styles: Option<Vec<String>>,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            base_url: default_base_url(),
            minify: default_minify(),
            static_dir: default_static_dir(),
            styles: None,
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_static_dir() -> String {
    "static".to_string()
}

impl ConfigFile {
    /// Load configuration from the given path if it exists.
    ///
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Turn the file configuration into a build configuration.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            content_dir: PathBuf::from(&self.content.dir),
            output_dir: PathBuf::from(&self.build.output),
            site: self.site.clone(),
            base_url: self.build.base_url.clone(),
            minify: self.build.minify,
            static_dir: PathBuf::from(&self.build.static_dir),
            styles: self.build.styles.clone().unwrap_or_default(),
            live_reload: false,
        }
    }
}
