//! Browsing commands: shop listing, product pages, collections and gallery.
//!
//! # Usage
//!
//! ```bash
//! # Dresses under ₦80,000, cheapest first
//! jazz shop --category dresses --price 50k-80k --sort price-low
//!
//! # The same listing from a shared link
//! jazz shop --query "category=dresses&price=50k-80k&sort=price-low"
//!
//! # Product page with related pieces
//! jazz product 1
//! ```

use std::io::Write;

use clap::Args;
use jazz_core::gallery::{bundled_gallery, filter_gallery};
use jazz_core::{FilterCriteria, GalleryCategory, ParseFilterError};
use jazz_storefront::StorefrontError;
use jazz_storefront::query::{criteria_from_query, criteria_to_query};

use super::{CommandResult, Context, write_row};

/// Related pieces shown under a product.
const RELATED_LIMIT: usize = 4;

/// Shop listing filters.
#[derive(Debug, Default, Args)]
pub struct ShopArgs {
    /// Category (`all`, label or slug, e.g. `corporate-wear`)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Price range (`under-30k`, `30k-50k`, `50k-80k`, `over-80k`)
    #[arg(short, long)]
    pub price: Option<String>,

    /// Color to include (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Size to include (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Hide sold-out pieces
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (`newest`, `price-low`, `price-high`)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Start from a shop URL query string; flags are applied on top
    #[arg(short, long)]
    pub query: Option<String>,
}

impl ShopArgs {
    /// Build the listing criteria.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFilterError`] for an unrecognized category, price
    /// range or sort key.
    pub fn criteria(&self) -> Result<FilterCriteria, ParseFilterError> {
        let mut criteria = match &self.query {
            Some(query) => criteria_from_query(query)?,
            None => FilterCriteria::new(),
        };
        if let Some(category) = &self.category {
            criteria.category = category.parse()?;
        }
        if let Some(price) = &self.price {
            criteria.price_bucket = Some(price.parse()?);
        }
        criteria.colors.extend(self.colors.iter().cloned());
        criteria.sizes.extend(self.sizes.iter().cloned());
        criteria.in_stock_only |= self.in_stock;
        if let Some(sort) = &self.sort {
            criteria.sort = sort.parse()?;
        }
        Ok(criteria)
    }
}

/// Print the filtered listing.
///
/// # Errors
///
/// Returns an error for unparseable filters or failed output.
pub fn shop(ctx: &Context, args: &ShopArgs, out: &mut impl Write) -> CommandResult {
    let criteria = args.criteria().map_err(StorefrontError::from)?;
    let listing = ctx.view.filtered(&criteria);

    let query = criteria_to_query(&criteria);
    if query.is_empty() {
        writeln!(out, "Shop: {} of {} pieces", listing.len(), ctx.view.catalog().len())?;
    } else {
        writeln!(
            out,
            "Shop: {} of {} pieces (?{query})",
            listing.len(),
            ctx.view.catalog().len()
        )?;
    }

    if listing.is_empty() {
        writeln!(out, "No pieces match your filters.")?;
        if criteria.is_active() {
            writeln!(out, "Clear filters to see the full collection.")?;
        }
        return Ok(());
    }
    for product in listing.iter() {
        write_row(out, product)?;
    }
    Ok(())
}

/// Print a product page.
///
/// # Errors
///
/// Returns [`StorefrontError::NotFound`] for an unknown id.
pub fn product(ctx: &Context, id: &str, out: &mut impl Write) -> CommandResult {
    let product = ctx.product(id)?;

    writeln!(out, "{}", product.name)?;
    writeln!(out, "{} | {}", product.price, product.category)?;
    writeln!(
        out,
        "{}",
        if product.in_stock { "In stock" } else { "Sold out" }
    )?;
    if !product.description.is_empty() {
        writeln!(out, "\n{}", product.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Sizes:  {}", product.sizes.join(", "))?;
    writeln!(out, "Colors: {}", product.colors.join(", "))?;
    for (label, text) in [
        ("Fabric", &product.fabric),
        ("Care", &product.care_notes),
        ("Fit", &product.fit_notes),
    ] {
        if !text.is_empty() {
            writeln!(out, "{label}: {text}")?;
        }
    }
    if let Some((size, color)) = product.default_selection() {
        writeln!(out, "Selected: {size}, {color}")?;
    }

    let related = ctx.view.catalog().related(product, RELATED_LIMIT);
    if !related.is_empty() {
        writeln!(out, "\nYou may also like:")?;
        for item in related {
            write_row(out, item)?;
        }
    }
    Ok(())
}

/// Print the newest pieces.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn new_arrivals(ctx: &Context, limit: usize, out: &mut impl Write) -> CommandResult {
    writeln!(out, "New arrivals")?;
    for product in ctx.view.catalog().new_arrivals(limit) {
        write_row(out, product)?;
    }
    Ok(())
}

/// Print the featured pieces.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn featured(ctx: &Context, limit: usize, out: &mut impl Write) -> CommandResult {
    writeln!(out, "Featured")?;
    for product in ctx.view.catalog().featured(limit) {
        write_row(out, product)?;
    }
    Ok(())
}

/// Print gallery images, optionally for one section.
///
/// # Errors
///
/// Returns [`StorefrontError::NotFound`] for an unknown section.
pub fn gallery(category: Option<&str>, out: &mut impl Write) -> CommandResult {
    let category = category
        .map(|name| {
            name.parse::<GalleryCategory>()
                .map_err(|_| StorefrontError::NotFound(format!("Gallery section {name}")))
        })
        .transpose()?;

    let images = bundled_gallery();
    for image in filter_gallery(&images, category) {
        write!(out, "  {:<11} {}", image.category.label(), image.alt)?;
        match &image.caption {
            Some(caption) => writeln!(out, " ({caption})")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

/// Print store settings.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn info(ctx: &Context, out: &mut impl Write) -> CommandResult {
    let config = &ctx.config;
    writeln!(out, "JAZZ 11/11")?;
    writeln!(out, "WhatsApp: +{}", config.checkout.merchant_number)?;
    if let Some(email) = &config.store.contact_email {
        writeln!(out, "Email:    {email}")?;
    }
    if let Some(location) = &config.store.location {
        writeln!(out, "Location: {location}")?;
    }
    match &config.catalog_path {
        Some(path) => writeln!(out, "Catalog:  {}", path.display())?,
        None => writeln!(out, "Catalog:  bundled ({} pieces)", ctx.view.catalog().len())?,
    }
    writeln!(out, "Cart:     {}", config.cart_path.display())?;
    Ok(())
}
