//! Product sources.
//!
//! The listing engine does not care where products come from: the bundled
//! catalog or a JSON export of the managed catalog store.

use std::fs;
use std::path::{Path, PathBuf};

use jazz_core::{Catalog, CatalogError, Product};
use thiserror::Error;
use tracing::{info, warn};

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Something that can produce the product catalog.
pub trait ProductSource {
    /// Load the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the catalog cannot be read or is invalid.
    fn load(&self) -> Result<Catalog, SourceError>;
}

/// The built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl ProductSource for BundledSource {
    fn load(&self) -> Result<Catalog, SourceError> {
        Ok(Catalog::bundled())
    }
}

/// A JSON array of products on disk.
///
/// Products that cannot be offered for sale (no sizes, no colors, zero
/// price) are skipped with a warning. Repeated ids are an error.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn load(&self) -> Result<Catalog, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let total = products.len();
        let sellable: Vec<Product> = products
            .into_iter()
            .filter(|product| match product.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Skipping product");
                    false
                }
            })
            .collect();

        info!(
            path = %self.path.display(),
            loaded = sellable.len(),
            skipped = total - sellable.len(),
            "Loaded catalog"
        );
        Ok(Catalog::new(sellable)?)
    }
}

/// Pick the source named by configuration.
#[must_use]
pub fn source_for(path: Option<&Path>) -> Box<dyn ProductSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jazz_core::ProductId;
    use tempfile::TempDir;

    use super::*;

    const PRODUCTS: &str = r#"[
        {"id": "a", "name": "Ankara Maxi", "price": 52000, "category": "Dresses",
         "sizes": ["M", "L"], "colors": ["Blue"], "isNew": true},
        {"id": "b", "name": "Broken", "price": 10000, "category": "Tops",
         "sizes": [], "colors": ["Red"]},
        {"id": "c", "name": "Clutch", "price": 18000, "category": "Bags",
         "sizes": ["One Size"], "colors": ["Gold"], "inStock": false}
    ]"#;

    fn write(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("products.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_bundled_source() {
        assert_eq!(BundledSource.load().unwrap().len(), 8);
    }

    #[test]
    fn test_json_source_skips_unsellable_products() {
        let dir = TempDir::new().unwrap();
        let catalog = JsonFileSource::new(write(&dir, PRODUCTS)).load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(&ProductId::new("b")).is_none());
        assert!(!catalog.find(&ProductId::new("c")).unwrap().in_stock);
    }

    #[test]
    fn test_json_source_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let json = r#"[
            {"id": "a", "name": "One", "price": 1, "category": "Tops", "sizes": ["M"], "colors": ["Red"]},
            {"id": "a", "name": "Two", "price": 2, "category": "Tops", "sizes": ["M"], "colors": ["Red"]}
        ]"#;
        let result = JsonFileSource::new(write(&dir, json)).load();
        assert!(matches!(
            result,
            Err(SourceError::Catalog(CatalogError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_json_source_missing_file() {
        let result = JsonFileSource::new("/nonexistent/products.json").load();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_json_source_bad_json() {
        let dir = TempDir::new().unwrap();
        let result = JsonFileSource::new(write(&dir, "{}")).load();
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn test_source_for() {
        assert_eq!(source_for(None).load().unwrap().len(), 8);
    }
}
