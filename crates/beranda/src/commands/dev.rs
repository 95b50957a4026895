//! Development server command.

use std::path::Path;

use anyhow::Result;
use beranda_server::{DevServer, DevServerConfig};
use beranda_static::ConfigFile;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let file_config = ConfigFile::load(config_path)?;

    let mut build = file_config.build_config();
    build.live_reload = true;

    let config = DevServerConfig {
        build,
        config_path: config_path.to_path_buf(),
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
