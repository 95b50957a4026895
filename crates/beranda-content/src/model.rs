//! Record shapes supplied by the content store.

use serde::Deserialize;

/// Site-wide metadata, supplied once at build time.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteMetadata {
    /// Site title
    #[serde(default)]
    pub title: String,

    /// Short tagline shown next to the title
    #[serde(default)]
    pub tagline: String,

    /// Longer description for meta tags
    #[serde(default)]
    pub description: String,
}

/// A single learning resource from the `learning` collection.
///
/// Collection order is insertion order from the content source and is
/// preserved through assembly. The `id` is used as a rendering key and is
/// expected (but not enforced) to be unique within the collection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LearningMaterial {
    /// Unique identifier, used as the card key
    pub id: String,

    /// Material category, e.g. "Article" or "Video"
    #[serde(rename = "type")]
    pub kind: String,

    /// Display title
    pub title: String,

    /// Short description shown on the card body
    pub description: String,

    /// Link target, absolute or site-relative
    pub url: String,

    /// Whether the material is promoted on the homepage
    #[serde(default)]
    pub featured: bool,
}
