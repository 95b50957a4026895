//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use beranda_content::{ContentStore, LearningMaterial, SiteMetadata, StoreError};
use beranda_pages::{home_page, learning_page, render, Page};

use crate::assets::AssetPipeline;
use crate::templates::{Context, TemplateEngine};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content collections directory
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Site metadata from configuration
    pub site: SiteMetadata,

    /// Base URL for the site
    pub base_url: String,

    /// Minify CSS output
    pub minify: bool,

    /// Directory of files copied into the output as-is (images etc.)
    pub static_dir: PathBuf,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,

    /// Inject the live-reload client script (dev builds only)
    pub live_reload: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            site: SiteMetadata::default(),
            base_url: "/".to_string(),
            minify: true,
            static_dir: PathBuf::from("static"),
            styles: vec![],
            live_reload: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load content: {0}")]
    ContentError(#[from] StoreError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A page to be written out.
struct PageArtifact {
    /// Site-relative URL of the page
    url_path: &'static str,

    /// Output file path
    output_path: PathBuf,

    /// Assembled page
    page: Page,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let store = ContentStore::scan(&self.config.content_dir)?;

        if !store.contains("learning") {
            tracing::warn!(
                "No learning collection under {}; rendering an empty catalog",
                self.config.content_dir.display()
            );
        }

        let materials: Vec<LearningMaterial> = store.collection("learning")?;

        let artifacts = self.assemble_pages(&materials);

        let results: Vec<Result<(), BuildError>> = artifacts
            .par_iter()
            .map(|artifact| self.write_page(artifact))
            .collect();

        for result in results {
            result?;
        }

        self.generate_assets()?;
        self.copy_static_files()?;
        self.generate_sitemap(&artifacts)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: artifacts.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Assemble every page of the site.
    fn assemble_pages(&self, materials: &[LearningMaterial]) -> Vec<PageArtifact> {
        vec![
            PageArtifact {
                url_path: "",
                output_path: self.config.output_dir.join("index.html"),
                page: home_page(&self.config.site, materials),
            },
            PageArtifact {
                url_path: "learning/",
                output_path: self.config.output_dir.join("learning").join("index.html"),
                page: learning_page(&self.config.site, materials),
            },
        ]
    }

    /// Render one page through the template and write it out.
    fn write_page(&self, artifact: &PageArtifact) -> Result<(), BuildError> {
        let context = Context {
            title: artifact.page.title.clone(),
            description: artifact.page.description.clone(),
            content: render(&artifact.page.body),
            base_url: self.config.base_url.clone(),
            styles: self
                .config
                .styles
                .iter()
                .map(|s| {
                    let filename = Path::new(s)
                        .file_name()
                        .and_then(|f| f.to_str())
                        .unwrap_or("style.css");
                    format!("{}assets/{}", self.config.base_url, filename)
                })
                .collect(),
            live_reload: self.config.live_reload,
        };

        let html = self
            .templates
            .render_page("page.html", &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        if let Some(parent) = artifact.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&artifact.output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Copy the static directory into the output as-is.
    ///
    /// Homepage copy references images under `/images/`; this is where they
    /// come from. A missing static directory is fine.
    fn copy_static_files(&self) -> Result<(), BuildError> {
        if !self.config.static_dir.exists() {
            return Ok(());
        }

        for entry in walkdir::WalkDir::new(&self.config.static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.config.static_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(path, &target).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self, artifacts: &[PageArtifact]) -> Result<(), BuildError> {
        let urls: Vec<String> = artifacts
            .iter()
            .map(|artifact| {
                format!(
                    "  <url>\n    <loc>{}{}</loc>\n  </url>",
                    self.config.base_url, artifact.url_path
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn site() -> SiteMetadata {
        SiteMetadata {
            title: "ReactJS ID".to_string(),
            tagline: "Komunitas".to_string(),
            description: "Komunitas developer React Indonesia".to_string(),
        }
    }

    fn write_learning(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("learning.json"),
            r#"[
                {"id": "1", "type": "Article", "title": "Intro", "description": "Pengenalan", "url": "/a", "featured": true},
                {"id": "2", "type": "Video", "title": "Hooks", "description": "Belajar hooks", "url": "/b"}
            ]"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn builds_home_and_learning_pages() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_learning(&content);

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: content,
            output_dir: out.clone(),
            site: site(),
            ..Default::default()
        });
        let result = builder.build().await.unwrap();

        assert_eq!(result.pages, 2);

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("<title>ReactJS ID · Komunitas</title>"));
        assert!(home.contains(r#"data-key="1""#));
        assert!(!home.contains(r#"data-key="2""#));

        let learning = fs::read_to_string(out.join("learning").join("index.html")).unwrap();
        assert!(learning.contains(r#"data-key="2""#));
    }

    #[tokio::test]
    async fn missing_content_renders_empty_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: temp.path().join("no-content"),
            output_dir: out.clone(),
            site: site(),
            ..Default::default()
        });
        let result = builder.build().await.unwrap();

        assert_eq!(result.pages, 2);
        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains(r#"<div class="card-grid"></div>"#));
    }

    #[tokio::test]
    async fn malformed_content_fails_the_build() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("learning.json"), "not json").unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: content,
            output_dir: temp.path().join("dist"),
            site: site(),
            ..Default::default()
        });

        let result = builder.build().await;

        assert!(matches!(result, Err(BuildError::ContentError(_))));
    }

    #[tokio::test]
    async fn generates_assets_and_sitemap() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_learning(&content);

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: content,
            output_dir: out.clone(),
            site: site(),
            ..Default::default()
        });
        builder.build().await.unwrap();

        assert!(out.join("assets").join("main.css").exists());

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>/</loc>"));
        assert!(sitemap.contains("<loc>/learning/</loc>"));
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn copies_static_files_into_output() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_learning(&content);

        let static_dir = temp.path().join("static");
        fs::create_dir_all(static_dir.join("images")).unwrap();
        fs::write(static_dir.join("images").join("rk-tshirt.jpg"), b"jpg").unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: content,
            output_dir: out.clone(),
            site: site(),
            static_dir,
            ..Default::default()
        });
        builder.build().await.unwrap();

        assert!(out.join("images").join("rk-tshirt.jpg").exists());
    }

    #[tokio::test]
    async fn dev_build_injects_reload_script() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_learning(&content);

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: content,
            output_dir: out.clone(),
            site: site(),
            live_reload: true,
            ..Default::default()
        });
        builder.build().await.unwrap();

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("__reload.js"));
    }
}
