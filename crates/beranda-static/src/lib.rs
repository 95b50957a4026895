//! Static site builder for the beranda homepage.
//!
//! Loads the content store, runs the page assemblers, and writes the
//! rendered site plus assets, sitemap, and robots.txt.

pub mod assets;
pub mod builder;
pub mod config;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use config::{ConfigError, ConfigFile};
