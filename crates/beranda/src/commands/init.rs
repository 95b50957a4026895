//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing beranda...");

    let content_dir = Path::new("content");

    // Check if content already exists
    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    // Create default config
    let config_path = Path::new("beranda.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write beranda.toml")?;
        tracing::info!("Created beranda.toml");
    }

    // Create learning collection
    let learning_path = content_dir.join("learning.json");
    if !learning_path.exists() || yes {
        fs::write(&learning_path, DEFAULT_LEARNING).context("Failed to write learning.json")?;
        tracing::info!("Created content/learning.json");
    }

    // Create static images directory; the homepage expects
    // static/images/rk-tshirt.jpg to exist
    let images_dir = Path::new("static").join("images");
    if !images_dir.exists() {
        fs::create_dir_all(&images_dir).context("Failed to create static/images directory")?;
        tracing::info!("Created static/images (place rk-tshirt.jpg and other site images here)");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'beranda dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Beranda Configuration

[site]
# Site title
title = "ReactJS ID"

# Tagline shown next to the title
tagline = "Komunitas"

# Longer description for meta tags
description = "Komunitas developer React dan React Native Indonesia"

[content]
# Directory holding JSON content collections
dir = "content"

[build]
# Output directory for the built site
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Enable minification
minify = true

# Directory copied into the output as-is; the homepage references
# static/images/rk-tshirt.jpg
static_dir = "static"
"#;

const DEFAULT_LEARNING: &str = r#"[
  {
    "id": "1",
    "type": "Article",
    "title": "Dokumentasi Resmi React",
    "description": "Mulai dari dasar dengan dokumentasi resmi React, tersedia dalam banyak bahasa.",
    "url": "https://react.dev/learn",
    "featured": true
  },
  {
    "id": "2",
    "type": "Video",
    "title": "Pengenalan React Hooks",
    "description": "Seri video tentang hooks: useState, useEffect, dan membuat hook sendiri.",
    "url": "https://www.youtube.com/watch?v=dpw9EHDh2bM",
    "featured": true
  },
  {
    "id": "3",
    "type": "Article",
    "title": "Berpikir dalam React",
    "description": "Cara membagi antarmuka menjadi komponen dan mengalirkan data di antaranya.",
    "url": "https://react.dev/learn/thinking-in-react",
    "featured": false
  }
]
"#;
