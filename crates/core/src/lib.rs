//! JAZZ 11/11 Core - Catalog and cart engines.
//!
//! This crate holds the two pieces of real logic behind the boutique
//! storefront:
//! - [`filter`] - Shop listing filter/sort engine
//! - [`cart`] - Cart aggregation and order totals
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! persistence, no HTTP. Session ownership, persistence and checkout links
//! live in `jazz-storefront`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and naira prices
//! - [`catalog`] - Products, categories and catalog queries
//! - [`gallery`] - Lookbook images
//! - [`filter`] - Filter criteria, price buckets, sorting
//! - [`cart`] - Line items and the cart
//! - [`order`] - Order messages handed to the messaging deep-link

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod order;
pub mod types;

pub use cart::{Cart, CartError, LineItem, LineKey, SelectionKind};
pub use catalog::{Catalog, CatalogError, Category, Product, ProductError};
pub use filter::{CategoryFilter, FilterCriteria, ParseFilterError, PriceBucket, SortKey, apply};
pub use gallery::{GalleryCategory, GalleryImage};
pub use types::*;
