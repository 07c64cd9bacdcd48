//! Per-session cart service.
//!
//! A [`ShopSession`] is constructed once per browsing session and handed by
//! reference to whatever needs the cart. Every mutation is applied to the
//! in-memory cart first and then written through to the session's
//! [`CartStore`]; a failed write is logged and otherwise ignored.

use std::num::NonZeroU32;

use jazz_core::{Cart, CartError, Product, ProductId};
use tracing::{info, instrument, warn};

use crate::checkout::{CheckoutConfig, CheckoutError, cart_checkout_link};
use crate::persist::CartStore;

/// Session-owned cart with write-through persistence.
#[derive(Debug)]
pub struct ShopSession<S> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> ShopSession<S> {
    /// Open a session, restoring the persisted cart if there is one.
    ///
    /// A cart that cannot be loaded is logged and replaced by an empty one.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Self {
        let cart = match store.load() {
            Ok(Some(cart)) => {
                info!(lines = cart.line_item_count(), "Restored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to restore cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, store }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// End the session, returning the cart.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// Add `quantity` units of a product selection.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidSelection`] if the product does not offer
    /// the size or color. Nothing is written in that case.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(
        &mut self,
        product: &Product,
        size: &str,
        color: &str,
        quantity: NonZeroU32,
    ) -> Result<(), CartError> {
        self.cart.add_item(product, size, color, quantity)?;
        self.persist();
        Ok(())
    }

    /// Set a row's quantity; zero removes it.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) {
        self.cart.update_quantity(product_id, size, color, quantity);
        self.persist();
    }

    /// Remove a row if present.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str, color: &str) {
        self.cart.remove_item(product_id, size, color);
        self.persist();
    }

    /// Empty the cart and forget the stored copy.
    ///
    /// If the store cannot forget the copy, an empty cart is saved over it
    /// so a later [`open`](Self::open) does not bring the old cart back.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear stored cart, overwriting it");
            self.persist();
        }
    }

    /// Deep-link checking out the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart is empty.
    pub fn checkout_link(&self, config: &CheckoutConfig) -> Result<String, CheckoutError> {
        cart_checkout_link(config, &self.cart)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.cart) {
            warn!(error = %e, "Failed to persist cart");
        }
    }
}
