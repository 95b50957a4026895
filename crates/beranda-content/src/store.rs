//! Content store resolving named JSON collections at build time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

/// Errors that can occur while loading content.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read content file: {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Collection {name} in {path} is not a JSON array")]
    NotAnArray { name: String, path: String },

    #[error("Failed to deserialize collection {name}: {message}")]
    ShapeError { name: String, message: String },
}

/// A snapshot of all content collections, loaded once per build.
///
/// Every `*.json` file under the content directory becomes a named
/// collection (file stem = collection name) holding a JSON array. Records
/// keep the order they appear in on disk.
#[derive(Debug, Default)]
pub struct ContentStore {
    collections: HashMap<String, Vec<serde_json::Value>>,
}

impl ContentStore {
    /// Load every JSON collection under `dir`.
    ///
    /// A missing directory yields an empty store; individual files that are
    /// unreadable or malformed fail the scan.
    pub fn scan(dir: &Path) -> Result<Self, StoreError> {
        let mut collections = HashMap::new();

        if !dir.exists() {
            return Ok(Self { collections });
        }

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "json" {
                continue;
            }

            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("collection")
                .to_string();

            let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let value: serde_json::Value =
                serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            let serde_json::Value::Array(records) = value else {
                return Err(StoreError::NotAnArray {
                    name,
                    path: path.display().to_string(),
                });
            };

            collections.insert(name, records);
        }

        Ok(Self { collections })
    }

    /// Whether a collection with this name was loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Names of all loaded collections.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Resolve a collection into typed records, preserving source order.
    ///
    /// A collection that was never loaded resolves to an empty list; records
    /// that do not match the expected shape are an error.
    pub fn collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let Some(records) = self.collections.get(name) else {
            return Ok(Vec::new());
        };

        records
            .iter()
            .map(|record| {
                serde_json::from_value(record.clone()).map_err(|e| StoreError::ShapeError {
                    name: name.to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
