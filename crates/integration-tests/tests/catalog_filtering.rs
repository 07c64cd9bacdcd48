//! Integration tests for the shop listing engine.
//!
//! Run with: cargo test -p jazz-integration-tests

#![allow(clippy::indexing_slicing)]

use jazz_core::{
    Catalog, Category, CategoryFilter, FilterCriteria, PriceBucket, Product, SortKey, apply,
};
use jazz_integration_tests::{abc, product, product_with};
use jazz_storefront::CatalogView;
use jazz_storefront::query::{criteria_from_query, criteria_to_query};

const SORTS: [SortKey; 3] = [
    SortKey::Newest,
    SortKey::PriceAscending,
    SortKey::PriceDescending,
];

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

/// Every combination of category, price bucket, stock flag and sort, plus a
/// handful of color and size selections.
fn all_criteria() -> Vec<FilterCriteria> {
    let categories = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only));
    let buckets: Vec<Option<PriceBucket>> = std::iter::once(None)
        .chain(PriceBucket::ALL.into_iter().map(Some))
        .collect();
    let colors: [&[&str]; 3] = [&[], &["Black"], &["Black", "Navy"]];
    let sizes: [&[&str]; 3] = [&[], &["XL"], &["S", "One Size"]];

    let mut out = Vec::new();
    for category in categories {
        for &bucket in &buckets {
            for color_set in colors {
                for size_set in sizes {
                    for in_stock_only in [false, true] {
                        for sort in SORTS {
                            let mut criteria = FilterCriteria::new()
                                .with_category(category)
                                .sorted_by(sort);
                            criteria.price_bucket = bucket;
                            criteria.in_stock_only = in_stock_only;
                            criteria.colors = color_set.iter().map(|c| (*c).to_string()).collect();
                            criteria.sizes = size_set.iter().map(|s| (*s).to_string()).collect();
                            out.push(criteria);
                        }
                    }
                }
            }
        }
    }
    out
}

// ============================================================================
// Engine Properties
// ============================================================================

#[test]
fn test_result_is_subset_without_duplicates() {
    let catalog = Catalog::bundled();
    for criteria in all_criteria() {
        let result = apply(catalog.products(), &criteria);
        let mut seen = ids(&result);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.len(), "duplicates for {criteria:?}");
        for p in &result {
            assert!(catalog.find(&p.id).is_some());
            assert!(criteria.matches(p), "{} does not match {criteria:?}", p.id);
        }
    }
}

#[test]
fn test_nothing_matching_is_dropped() {
    let catalog = Catalog::bundled();
    for criteria in all_criteria() {
        let result = apply(catalog.products(), &criteria);
        let expected = catalog.products().iter().filter(|p| criteria.matches(p)).count();
        assert_eq!(result.len(), expected, "count mismatch for {criteria:?}");
    }
}

#[test]
fn test_apply_is_idempotent() {
    let catalog = Catalog::bundled();
    for criteria in all_criteria() {
        let once: Vec<Product> = apply(catalog.products(), &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice = apply(&once, &criteria);
        assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
    }
}

#[test]
fn test_sort_orders_are_respected() {
    let catalog = Catalog::bundled();
    let all = |sort| apply(catalog.products(), &FilterCriteria::new().sorted_by(sort));

    let asc = all(SortKey::PriceAscending);
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

    let desc = all(SortKey::PriceDescending);
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

    let newest = all(SortKey::Newest);
    let first_old = newest.iter().position(|p| !p.is_new).unwrap_or(newest.len());
    assert!(newest[first_old..].iter().all(|p| !p.is_new));
}

#[test]
fn test_equal_prices_keep_catalog_order() {
    let products = vec![
        product("x1", 40_000, Category::Tops, false),
        product("x2", 30_000, Category::Tops, true),
        product("x3", 40_000, Category::Tops, true),
        product("x4", 40_000, Category::Tops, false),
    ];
    let asc = apply(&products, &FilterCriteria::new().sorted_by(SortKey::PriceAscending));
    assert_eq!(ids(&asc), ["x2", "x1", "x3", "x4"]);

    let desc = apply(&products, &FilterCriteria::new().sorted_by(SortKey::PriceDescending));
    assert_eq!(ids(&desc), ["x1", "x3", "x4", "x2"]);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_newest_first_scenario() {
    let products = abc();
    let result = apply(&products, &FilterCriteria::new());
    assert_eq!(ids(&result), ["A", "C", "B"]);
}

#[test]
fn test_price_low_scenario() {
    let products = abc();
    let result = apply(&products, &FilterCriteria::new().sorted_by(SortKey::PriceAscending));
    assert_eq!(ids(&result), ["A", "C", "B"]);

    let result = apply(&products, &FilterCriteria::new().sorted_by(SortKey::PriceDescending));
    assert_eq!(ids(&result), ["B", "C", "A"]);
}

#[test]
fn test_bucket_boundaries_are_half_open() {
    let products = vec![
        product("29999", 29_999, Category::Bags, false),
        product("30000", 30_000, Category::Bags, false),
        product("50000", 50_000, Category::Bags, false),
        product("80000", 80_000, Category::Bags, false),
    ];
    let by_bucket = |bucket| {
        ids(&apply(
            &products,
            &FilterCriteria::new()
                .with_price_bucket(bucket)
                .sorted_by(SortKey::PriceAscending),
        ))
    };
    assert_eq!(by_bucket(PriceBucket::Under30k), ["29999"]);
    assert_eq!(by_bucket(PriceBucket::From30kTo50k), ["30000"]);
    assert_eq!(by_bucket(PriceBucket::From50kTo80k), ["50000"]);
    assert_eq!(by_bucket(PriceBucket::Over80k), ["80000"]);
}

#[test]
fn test_color_and_size_match_any_within_dimension() {
    let products = vec![
        product_with("red-s", 10_000, Category::Tops, &["S"], &["Red"]),
        product_with("blue-m", 10_000, Category::Tops, &["M"], &["Blue"]),
        product_with("red-m", 10_000, Category::Tops, &["M"], &["Red", "Green"]),
    ];
    let criteria = FilterCriteria::new().with_color("Red").with_color("Blue");
    assert_eq!(apply(&products, &criteria).len(), 3);

    let criteria = criteria.with_size("M");
    assert_eq!(ids(&apply(&products, &criteria)), ["blue-m", "red-m"]);
}

#[test]
fn test_clear_filters_keeps_sort() {
    let catalog = Catalog::bundled();
    let mut criteria = FilterCriteria::new()
        .with_category(Category::Bags)
        .with_size("XXL")
        .sorted_by(SortKey::PriceDescending);
    assert!(apply(catalog.products(), &criteria).is_empty());

    criteria.clear_filters();
    assert!(!criteria.is_active());
    let result = apply(catalog.products(), &criteria);
    assert_eq!(result.len(), catalog.len());
    assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
}

// ============================================================================
// URL State & Memoized Views
// ============================================================================

#[test]
fn test_query_string_drives_the_same_listing() {
    let view = CatalogView::new(Catalog::bundled(), 32);
    for criteria in all_criteria().into_iter().step_by(7) {
        let query = criteria_to_query(&criteria);
        let parsed = criteria_from_query(&query).expect("Failed to parse generated query");
        assert_eq!(parsed, criteria);
        assert_eq!(view.filtered(&parsed), view.filtered(&criteria));
    }
}

#[test]
fn test_view_matches_engine_for_every_combination() {
    let view = CatalogView::new(Catalog::bundled(), 8);
    for criteria in all_criteria() {
        let expected: Vec<Product> = apply(view.catalog().products(), &criteria)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(&*view.filtered(&criteria), expected.as_slice());
    }
}

#[test]
fn test_view_follows_catalog_replacement() {
    let mut view = CatalogView::new(Catalog::bundled(), 8);
    let criteria = FilterCriteria::new();
    assert_eq!(view.filtered(&criteria).len(), 8);

    view.replace_catalog(Catalog::new(abc()).expect("Failed to build catalog"));
    let listing = view.filtered(&criteria);
    let names: Vec<&str> = listing.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(names, ["A", "C", "B"]);
}
