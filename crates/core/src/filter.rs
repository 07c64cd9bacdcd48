//! Shop listing filter/sort engine.
//!
//! [`apply`] composes the active filters conjunctively (category, price
//! bucket, color, size, stock) and then sorts the survivors. Within the
//! color and size dimensions a product matches if ANY of its values is
//! selected. Sorting is stable: products with equal keys keep their catalog
//! order.

use core::fmt;
use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::types::Price;

/// Error parsing a filter value from UI or URL state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value}")]
pub struct ParseFilterError {
    pub field: &'static str,
    pub value: String,
}

impl ParseFilterError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}

/// Category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| ParseFilterError::new("category", s))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Fixed half-open price intervals offered in the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    /// `[0, 30,000)`
    #[serde(rename = "under-30k")]
    Under30k,
    /// `[30,000, 50,000)`
    #[serde(rename = "30k-50k")]
    From30kTo50k,
    /// `[50,000, 80,000)`
    #[serde(rename = "50k-80k")]
    From50kTo80k,
    /// `[80,000, ∞)`
    #[serde(rename = "over-80k")]
    Over80k,
}

impl PriceBucket {
    pub const ALL: [Self; 4] = [
        Self::Under30k,
        Self::From30kTo50k,
        Self::From50kTo80k,
        Self::Over80k,
    ];

    /// Inclusive lower bound and exclusive upper bound. `None` is unbounded.
    #[must_use]
    pub const fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::Under30k => (0, Some(30_000)),
            Self::From30kTo50k => (30_000, Some(50_000)),
            Self::From50kTo80k => (50_000, Some(80_000)),
            Self::Over80k => (80_000, None),
        }
    }

    #[must_use]
    pub const fn contains(self, price: Price) -> bool {
        let amount = price.amount();
        match self.bounds() {
            (min, Some(max)) => amount >= min && amount < max,
            (min, None) => amount >= min,
        }
    }

    /// Sidebar label (e.g., "₦30,000 - ₦50,000").
    #[must_use]
    pub fn label(self) -> String {
        match self.bounds() {
            (0, Some(max)) => format!("Under {}", Price::new(max)),
            (min, Some(max)) => format!("{} - {}", Price::new(min), Price::new(max)),
            (min, None) => format!("Over {}", Price::new(min)),
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Under30k => "under-30k",
            Self::From30kTo50k => "30k-50k",
            Self::From50kTo80k => "50k-80k",
            Self::Over80k => "over-80k",
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PriceBucket {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.slug().eq_ignore_ascii_case(needle) || b.label() == needle)
            .ok_or_else(|| ParseFilterError::new("price range", s))
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// New arrivals first; no secondary key.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
}

impl SortKey {
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-low" | "price-asc" => Ok(Self::PriceAscending),
            "price-high" | "price-desc" => Ok(Self::PriceDescending),
            _ => Err(ParseFilterError::new("sort", s)),
        }
    }
}

/// Active filters and sort order for the shop listing.
///
/// Empty color and size sets mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price_bucket: Option<PriceBucket>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_price_bucket(mut self, bucket: PriceBucket) -> Self {
        self.price_bucket = Some(bucket);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    #[must_use]
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Checkbox behavior: select the color if absent, deselect otherwise.
    pub fn toggle_color(&mut self, color: &str) {
        if !self.colors.remove(color) {
            self.colors.insert(color.to_owned());
        }
    }

    /// Size button behavior: select the size if absent, deselect otherwise.
    pub fn toggle_size(&mut self, size: &str) {
        if !self.sizes.remove(size) {
            self.sizes.insert(size.to_owned());
        }
    }

    /// Whether any filter (not counting the sort) is engaged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All
            || self.price_bucket.is_some()
            || !self.colors.is_empty()
            || !self.sizes.is_empty()
            || self.in_stock_only
    }

    /// Reset every filter dimension. The sort order is kept.
    pub fn clear_filters(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }

    /// Whether `product` passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && self.price_bucket.is_none_or(|b| b.contains(product.price))
            && (self.colors.is_empty() || product.colors.iter().any(|c| self.colors.contains(c)))
            && (self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s)))
            && (!self.in_stock_only || product.in_stock)
    }
}

/// Filter and sort `products` according to `criteria`.
///
/// Pure: the input is never modified and the result borrows from it, so a
/// product can be neither fabricated nor duplicated.
#[must_use]
pub fn apply<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products.iter().filter(|p| criteria.matches(p)).collect();
    sort(&mut filtered, criteria.sort);
    filtered
}

/// Stable sort of `products` by `key`.
pub fn sort(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        SortKey::PriceAscending => products.sort_by_key(|p| p.price),
        SortKey::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}
