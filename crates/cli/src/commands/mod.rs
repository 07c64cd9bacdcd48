//! Command implementations.
//!
//! Every command writes its output to a caller-supplied writer so the
//! binary can hand it a locked stdout and tests can hand it a buffer.

pub mod browse;
pub mod cart;

use std::io;

use jazz_core::{Product, ProductId};
use jazz_storefront::{
    CatalogView, JsonFileCartStore, ShopSession, StorefrontConfig, StorefrontError,
    source::source_for,
};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The storefront rejected the request.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Message shown to the shopper on stderr.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storefront(err) => err.user_message(),
            Self::Output(err) => err.to_string(),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;

/// Loaded configuration and catalog shared by every command.
#[derive(Debug)]
pub struct Context {
    pub config: StorefrontConfig,
    pub view: CatalogView,
}

impl Context {
    /// Load the catalog named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Source`] if the catalog cannot be loaded.
    pub fn load(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = source_for(config.catalog_path.as_deref()).load()?;
        let view = CatalogView::new(catalog, config.view_cache_capacity);
        Ok(Self { config, view })
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] for an unknown id.
    pub fn product(&self, id: &str) -> Result<&Product, StorefrontError> {
        self.view
            .catalog()
            .find(&ProductId::new(id))
            .ok_or_else(|| StorefrontError::NotFound(format!("Product {id}")))
    }

    /// Open the shopper's cart session.
    #[must_use]
    pub fn open_session(&self) -> ShopSession<JsonFileCartStore> {
        ShopSession::open(JsonFileCartStore::new(&self.config.cart_path))
    }
}

/// Badges appended to a listing row.
fn badges(product: &Product) -> String {
    let mut out = String::new();
    if product.is_new {
        out.push_str(" [new]");
    }
    if !product.in_stock {
        out.push_str(" [sold out]");
    }
    out
}

/// One listing row: id, name, price, category and badges.
fn write_row(out: &mut impl io::Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "  {:<4} {:<32} {:>10}  {}{}",
        product.id.as_str(),
        product.name,
        product.price.display(),
        product.category.label(),
        badges(product)
    )
}
