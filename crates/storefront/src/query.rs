//! Shop listing URL state.
//!
//! The shop page keeps its filters in the query string so listings can be
//! linked to (`/shop?category=dresses&sort=price-low`).

use jazz_core::{CategoryFilter, FilterCriteria, ParseFilterError, PriceBucket, SortKey};
use url::form_urlencoded;

/// Parse a query string (with or without the leading `?`) into criteria.
///
/// Recognized keys: `category`, `price`, `color` and `size` (repeatable, or
/// comma-separated), `in_stock`, `sort`. Unknown keys are ignored and empty
/// values count as absent.
///
/// # Errors
///
/// Returns [`ParseFilterError`] for an unrecognized category, price range,
/// sort key or `in_stock` flag.
pub fn criteria_from_query(query: &str) -> Result<FilterCriteria, ParseFilterError> {
    let mut criteria = FilterCriteria::new();
    let query = query.strip_prefix('?').unwrap_or(query);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "category" => criteria.category = value.parse::<CategoryFilter>()?,
            "price" => criteria.price_bucket = Some(value.parse::<PriceBucket>()?),
            "color" => criteria.colors.extend(split_list(value)),
            "size" => criteria.sizes.extend(split_list(value)),
            "in_stock" => criteria.in_stock_only = parse_flag(value)?,
            "sort" => criteria.sort = value.parse::<SortKey>()?,
            _ => {}
        }
    }
    Ok(criteria)
}

/// Render criteria back into a query string. Defaults are omitted.
#[must_use]
pub fn criteria_to_query(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let CategoryFilter::Only(category) = criteria.category {
        query.append_pair("category", category.slug());
    }
    if let Some(bucket) = criteria.price_bucket {
        query.append_pair("price", bucket.slug());
    }
    for color in &criteria.colors {
        query.append_pair("color", color);
    }
    for size in &criteria.sizes {
        query.append_pair("size", size);
    }
    if criteria.in_stock_only {
        query.append_pair("in_stock", "true");
    }
    if criteria.sort != SortKey::default() {
        query.append_pair("sort", criteria.sort.slug());
    }
    query.finish()
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn parse_flag(value: &str) -> Result<bool, ParseFilterError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ParseFilterError {
            field: "in_stock",
            value: value.to_owned(),
        }),
    }
}
