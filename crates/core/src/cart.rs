//! Cart aggregation.
//!
//! A [`Cart`] holds line items keyed by (product, size, color). Adding an
//! existing combination increments its quantity instead of creating a second
//! row, and a line whose quantity drops to zero is removed, so every stored
//! line has a quantity of at least one.

use core::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Which half of a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Size,
    Color,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => f.write_str("size"),
            Self::Color => f.write_str("color"),
        }
    }
}

/// Cart errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The chosen size or color is not offered by the product.
    #[error("product {product_id} is not available in {kind} {value:?}")]
    InvalidSelection {
        product_id: ProductId,
        kind: SelectionKind,
        value: String,
    },
}

/// Check that `size` and `color` are offered by `product`.
///
/// # Errors
///
/// Returns [`CartError::InvalidSelection`] naming the first rejected value.
pub fn validate_selection(product: &Product, size: &str, color: &str) -> Result<(), CartError> {
    let reject = |kind, value: &str| CartError::InvalidSelection {
        product_id: product.id.clone(),
        kind,
        value: value.to_owned(),
    };
    if !product.offers_size(size) {
        return Err(reject(SelectionKind::Size, size));
    }
    if !product.offers_color(color) {
        return Err(reject(SelectionKind::Color, color));
    }
    Ok(())
}

/// Identity of a cart row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    #[must_use]
    pub fn new(product_id: ProductId, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
            color: color.into(),
        }
    }
}

/// One cart row: a product snapshot with a size, a color and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product: Product,
    size: String,
    color: String,
    quantity: u32,
}

impl LineItem {
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), &self.size, &self.color)
    }

    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    fn is(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product.id == product_id && self.size == size && self.color == color
    }
}

/// Persisted shape of a cart, before normalization.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    lines: Vec<LineItem>,
}

/// Shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product` in `size`/`color`.
    ///
    /// An existing row for the same combination has its quantity
    /// incremented; otherwise a row is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidSelection`] if the product does not offer
    /// `size` or `color`. The cart is left untouched.
    pub fn add_item(
        &mut self,
        product: &Product,
        size: &str,
        color: &str,
        quantity: NonZeroU32,
    ) -> Result<(), CartError> {
        validate_selection(product, size, color)?;

        if let Some(line) = self.line_mut(&product.id, size, color) {
            line.quantity = line.quantity.saturating_add(quantity.get());
        } else {
            self.lines.push(LineItem {
                product: product.clone(),
                size: size.to_owned(),
                color: color.to_owned(),
                quantity: quantity.get(),
            });
        }
        Ok(())
    }

    /// Set the quantity of a row. Zero removes it. Unknown rows are ignored.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) {
        if quantity == 0 {
            self.remove_item(product_id, size, color);
        } else if let Some(line) = self.line_mut(product_id, size, color) {
            line.quantity = quantity;
        }
    }

    /// Remove a row if present.
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str, color: &str) {
        self.lines.retain(|line| !line.is(product_id, size, color));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.lines
            .iter()
            .find(|line| line.is(&key.product_id, &key.size, &key.color))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals, recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Total units across all rows (cart badge).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct rows.
    #[must_use]
    pub fn line_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Human-readable order summary for the messaging checkout.
    #[must_use]
    pub fn to_order_message(&self) -> String {
        crate::order::order_message(self)
    }

    fn line_mut(&mut self, product_id: &ProductId, size: &str, color: &str) -> Option<&mut LineItem> {
        self.lines
            .iter_mut()
            .find(|line| line.is(product_id, size, color))
    }
}

impl From<CartSnapshot> for Cart {
    /// Rebuild a cart from persisted rows, dropping rows that break the
    /// cart invariants and merging repeated keys.
    fn from(snapshot: CartSnapshot) -> Self {
        let mut cart = Self::new();
        for line in snapshot.lines {
            let Some(quantity) = NonZeroU32::new(line.quantity) else {
                continue;
            };
            // A row whose product no longer offers the selection is dropped;
            // the error only names that row, so there is nothing to keep.
            let _ = cart.add_item(&line.product, &line.size, &line.color, quantity);
        }
        cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn gown() -> Product {
        Catalog::bundled().products()[0].clone()
    }

    fn skirt() -> Product {
        Catalog::bundled().products()[5].clone()
    }

    #[test]
    fn test_add_same_key_merges() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "M", "Black", qty(1)).unwrap();
        cart.add_item(&product, "M", "Black", qty(2)).unwrap();

        assert_eq!(cart.line_item_count(), 1);
        assert_eq!(cart.lines()[0].quantity(), 3);
        assert_eq!(cart.total_price(), product.price.times(3));
    }

    #[test]
    fn test_add_different_size_creates_row() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "M", "Black", qty(1)).unwrap();
        cart.add_item(&product, "L", "Black", qty(1)).unwrap();
        cart.add_item(&product, "L", "Burgundy", qty(1)).unwrap();
        assert_eq!(cart.line_item_count(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_invalid_size_leaves_cart_unchanged() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "M", "Black", qty(1)).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&product, "XXL", "Black", qty(1)).unwrap_err();
        assert_eq!(
            err,
            CartError::InvalidSelection {
                product_id: product.id.clone(),
                kind: SelectionKind::Size,
                value: "XXL".to_owned(),
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item(&gown(), "M", "Teal", qty(1)).unwrap_err();
        assert!(matches!(
            err,
            CartError::InvalidSelection {
                kind: SelectionKind::Color,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "S", "Burgundy", qty(2)).unwrap();
        cart.update_quantity(&product.id, "S", "Burgundy", 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let product = gown();
        let other = skirt();
        let mut base = Cart::new();
        base.add_item(&product, "S", "Burgundy", qty(2)).unwrap();
        base.add_item(&other, "M", "Wine", qty(1)).unwrap();

        let mut updated = base.clone();
        updated.update_quantity(&product.id, "S", "Burgundy", 0);
        let mut removed = base;
        removed.remove_item(&product.id, "S", "Burgundy");

        assert_eq!(updated, removed);
        assert_eq!(updated.line_item_count(), 1);
    }

    #[test]
    fn test_unknown_keys_are_noops() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "S", "Burgundy", qty(1)).unwrap();
        let before = cart.clone();

        cart.update_quantity(&product.id, "XL", "Burgundy", 4);
        cart.remove_item(&ProductId::new("missing"), "S", "Burgundy");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&gown(), "S", "Black", qty(1)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_get_by_key() {
        let product = skirt();
        let mut cart = Cart::new();
        cart.add_item(&product, "L", "Cream", qty(2)).unwrap();
        let key = LineKey::new(product.id.clone(), "L", "Cream");
        assert_eq!(cart.get(&key).unwrap().line_total(), Price::new(56_000));
        assert_eq!(cart.lines()[0].key(), key);
    }

    #[test]
    fn test_deserialize_normalizes_rows() {
        let product = gown();
        let mut cart = Cart::new();
        cart.add_item(&product, "M", "Black", qty(1)).unwrap();
        let mut value = serde_json::to_value(&cart).unwrap();

        let line = value["lines"][0].clone();
        let mut zero = line.clone();
        zero["quantity"] = 0.into();
        let mut bad_size = line.clone();
        bad_size["size"] = "XS".into();
        value["lines"] = serde_json::json!([line.clone(), zero, bad_size, line]);

        let restored: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(restored.line_item_count(), 1);
        assert_eq!(restored.item_count(), 2);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let cart: Cart = serde_json::from_str("{}").unwrap();
        assert!(cart.is_empty());
    }
}
