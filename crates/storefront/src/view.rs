//! Memoized shop listing views.
//!
//! Listing pages recompute the filtered catalog whenever UI or URL state
//! changes. [`CatalogView`] derives the view on read and caches it keyed on
//! `(catalog version, criteria)` using `moka`; replacing the catalog bumps
//! the version so stale views are never served.

use std::sync::Arc;

use jazz_core::filter::apply;
use jazz_core::{Catalog, FilterCriteria, Product};
use moka::sync::Cache;
use tracing::debug;

type ViewKey = (u64, FilterCriteria);

/// A catalog with memoized filtered views.
pub struct CatalogView {
    catalog: Arc<Catalog>,
    version: u64,
    cache: Cache<ViewKey, Arc<[Product]>>,
}

impl CatalogView {
    /// Wrap `catalog`, caching at most `capacity` views.
    #[must_use]
    pub fn new(catalog: Catalog, capacity: u64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            version: 0,
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Bumped on every [`replace_catalog`](Self::replace_catalog).
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The filtered, sorted listing for `criteria`.
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Arc<[Product]> {
        let catalog = &self.catalog;
        self.cache.get_with((self.version, criteria.clone()), || {
            debug!(version = self.version, ?criteria, "Computing listing view");
            apply(catalog.products(), criteria)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Swap in a new catalog and drop every cached view.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = Arc::new(catalog);
        self.version += 1;
        self.cache.invalidate_all();
        debug!(version = self.version, "Catalog replaced");
    }
}

impl std::fmt::Debug for CatalogView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogView")
            .field("products", &self.catalog.len())
            .field("version", &self.version)
            .field("cached_views", &self.cache.entry_count())
            .finish()
    }
}
