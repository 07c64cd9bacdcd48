//! JAZZ 11/11 Storefront library.
//!
//! Wraps the `jazz-core` engines in what a browsing session needs:
//! configuration, product sources, a session-owned cart with write-through
//! persistence, memoized listing views, URL filter state and WhatsApp
//! checkout links.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod persist;
pub mod query;
pub mod session;
pub mod source;
pub mod view;

pub use checkout::{CheckoutConfig, CheckoutError};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use persist::{CartStore, JsonFileCartStore, MemoryCartStore, PersistError};
pub use session::ShopSession;
pub use source::{BundledSource, JsonFileSource, ProductSource, SourceError};
pub use view::CatalogView;
