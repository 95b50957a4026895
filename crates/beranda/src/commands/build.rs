//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use beranda_static::{ConfigFile, StaticBuilder};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = ConfigFile::load(config_path)?;

    let mut config = file_config.build_config();
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
