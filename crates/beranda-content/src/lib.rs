//! Build-time content layer for the beranda site.
//!
//! This crate defines the record shapes the site is generated from and a
//! content store that resolves named JSON collections once, before any page
//! is assembled. Nothing here runs at request time.

pub mod model;
pub mod store;

pub use model::{LearningMaterial, SiteMetadata};
pub use store::{ContentStore, StoreError};
