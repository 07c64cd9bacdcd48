//! Integration tests for JAZZ 11/11.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jazz-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_filtering` - Listing filter/sort engine and memoized views
//! - `cart_checkout` - Cart aggregation, session persistence and checkout links
//!
//! This crate only holds fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use jazz_core::{Category, Price, Product, ProductId};

/// A sellable product with one size-set and one color-set.
#[must_use]
pub fn product(id: &str, price: u64, category: Category, is_new: bool) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Piece {id}"),
        price: Price::new(price),
        category,
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        colors: vec!["Black".to_string(), "Gold".to_string()],
        images: Vec::new(),
        in_stock: true,
        is_new,
        is_featured: false,
        description: String::new(),
        fabric: String::new(),
        care_notes: String::new(),
        fit_notes: String::new(),
    }
}

/// Same as [`product`] but with custom sizes and colors.
#[must_use]
pub fn product_with(
    id: &str,
    price: u64,
    category: Category,
    sizes: &[&str],
    colors: &[&str],
) -> Product {
    Product {
        sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        colors: colors.iter().map(|c| (*c).to_string()).collect(),
        ..product(id, price, category, false)
    }
}

/// The three-piece listing used by the ordering scenarios:
/// `A` (₦20,000, new), `B` (₦90,000), `C` (₦50,000, new).
#[must_use]
pub fn abc() -> Vec<Product> {
    vec![
        product("A", 20_000, Category::Dresses, true),
        product("B", 90_000, Category::Dresses, false),
        product("C", 50_000, Category::Tops, true),
    ]
}
