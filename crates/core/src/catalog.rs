//! Products, categories and catalog-level queries.

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Product category.
///
/// Labels match the storefront navigation and the managed catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Dresses")]
    Dresses,
    #[serde(rename = "Two-Piece Sets")]
    TwoPieceSets,
    #[serde(rename = "Corporate Wear")]
    CorporateWear,
    #[serde(rename = "Casual Wear")]
    CasualWear,
    #[serde(rename = "Tops")]
    Tops,
    #[serde(rename = "Skirts")]
    Skirts,
    #[serde(rename = "Shoes")]
    Shoes,
    #[serde(rename = "Bags")]
    Bags,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Dresses,
        Self::TwoPieceSets,
        Self::CorporateWear,
        Self::CasualWear,
        Self::Tops,
        Self::Skirts,
        Self::Shoes,
        Self::Bags,
    ];

    /// Display label (e.g., "Two-Piece Sets").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dresses => "Dresses",
            Self::TwoPieceSets => "Two-Piece Sets",
            Self::CorporateWear => "Corporate Wear",
            Self::CasualWear => "Casual Wear",
            Self::Tops => "Tops",
            Self::Skirts => "Skirts",
            Self::Shoes => "Shoes",
            Self::Bags => "Bags",
        }
    }

    /// URL slug (e.g., "two-piece-sets").
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dresses => "dresses",
            Self::TwoPieceSets => "two-piece-sets",
            Self::CorporateWear => "corporate-wear",
            Self::CasualWear => "casual-wear",
            Self::Tops => "tops",
            Self::Skirts => "skirts",
            Self::Shoes => "shoes",
            Self::Bags => "bags",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Accepts a label ("Corporate Wear") or a slug ("corporate-wear"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Reasons a product cannot be offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    #[error("product {0} has a zero price")]
    ZeroPrice(ProductId),
    #[error("product {0} offers no sizes")]
    NoSizes(ProductId),
    #[error("product {0} offers no colors")]
    NoColors(ProductId),
}

/// Errors building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidProduct(#[from] ProductError),
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// A product offered in the boutique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Size labels in display order ("S", "M", ... or "38", "39", ...).
    pub sizes: Vec<String>,
    /// Color labels in display order.
    pub colors: Vec<String>,
    /// Image references, primary image first.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fabric: String,
    #[serde(default)]
    pub care_notes: String,
    #[serde(default)]
    pub fit_notes: String,
}

const fn default_true() -> bool {
    true
}

impl Product {
    /// Check that the product can be offered for sale.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the name is blank, the price is zero,
    /// or no sizes or colors are offered.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(self.id.clone()));
        }
        if self.price.is_zero() {
            return Err(ProductError::ZeroPrice(self.id.clone()));
        }
        if self.sizes.is_empty() {
            return Err(ProductError::NoSizes(self.id.clone()));
        }
        if self.colors.is_empty() {
            return Err(ProductError::NoColors(self.id.clone()));
        }
        Ok(())
    }

    /// Whether `size` is one of this product's sizes.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` is one of this product's colors.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// The image shown on listing cards.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The size and color preselected on the product page.
    #[must_use]
    pub fn default_selection(&self) -> Option<(&str, &str)> {
        Some((self.sizes.first()?.as_str(), self.colors.first()?.as_str()))
    }
}

/// An ordered, validated product list with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on the first invalid product or repeated id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The boutique's built-in catalog.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            products: bundled_products(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// New arrivals in catalog order.
    #[must_use]
    pub fn new_arrivals(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).take(limit).collect()
    }

    /// Featured products in catalog order.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_featured)
            .take(limit)
            .collect()
    }

    /// Other products from the same category, in catalog order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Distinct colors across the catalog, in order of first appearance.
    #[must_use]
    pub fn color_facets(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.colors.iter()))
    }

    /// Distinct sizes across the catalog, in order of first appearance.
    #[must_use]
    pub fn size_facets(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.sizes.iter()))
    }

    /// Product count per category, in navigation order. Empty categories
    /// are included with a zero count.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: u64,
    category: Category,
    sizes: &[&str],
    colors: &[&str],
    image: &str,
    flags: (bool, bool),
    text: [&str; 4],
) -> Product {
    let [description, fabric, care_notes, fit_notes] = text;
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(price),
        category,
        sizes: sizes.iter().map(|s| (*s).to_owned()).collect(),
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        images: vec![image.to_owned()],
        in_stock: true,
        is_new: flags.0,
        is_featured: flags.1,
        description: description.to_owned(),
        fabric: fabric.to_owned(),
        care_notes: care_notes.to_owned(),
        fit_notes: fit_notes.to_owned(),
    }
}

fn bundled_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Burgundy Elegance Gown",
            85_000,
            Category::Dresses,
            &["S", "M", "L", "XL"],
            &["Burgundy", "Black"],
            "products/dress-1.jpg",
            (true, true),
            [
                "A stunning floor-length burgundy gown with elegant draping and embellished shoulders. Perfect for special occasions and evening events.",
                "Premium chiffon with satin lining",
                "Dry clean only. Store on padded hanger.",
                "Fits true to size. Flows beautifully at the waist.",
            ],
        ),
        product(
            "2",
            "Emerald Power Suit",
            75_000,
            Category::TwoPieceSets,
            &["S", "M", "L"],
            &["Emerald Green", "Navy"],
            "products/twopiece-1.jpg",
            (true, true),
            [
                "Make a bold statement with this tailored emerald green two-piece suit. Contemporary cut with belted waist for a flattering silhouette.",
                "Structured blend with stretch",
                "Dry clean recommended. Iron on medium heat.",
                "Fitted at waist. Consider sizing up for relaxed fit.",
            ],
        ),
        product(
            "3",
            "Golden Royale Blouse",
            35_000,
            Category::Tops,
            &["S", "M", "L", "XL", "XXL"],
            &["Gold/Cream"],
            "products/top-1.jpg",
            (false, true),
            [
                "Exquisite cream blouse with intricate gold embroidery. A true statement piece that elevates any outfit.",
                "Pure silk with gold thread embroidery",
                "Hand wash cold or dry clean. Do not wring.",
                "Relaxed fit. Beautiful with high-waisted bottoms.",
            ],
        ),
        product(
            "4",
            "Executive Black Suit",
            68_000,
            Category::CorporateWear,
            &["S", "M", "L", "XL"],
            &["Black", "Charcoal"],
            "products/corporate-1.jpg",
            (false, true),
            [
                "Command the boardroom with this impeccably tailored black power suit. Sharp lines and premium finish.",
                "Italian wool blend",
                "Dry clean only. Steam for best results.",
                "Tailored fit. True to size.",
            ],
        ),
        product(
            "5",
            "Terra Comfort Dress",
            42_000,
            Category::CasualWear,
            &["S", "M", "L", "XL", "XXL"],
            &["Terracotta", "Olive", "Navy"],
            "products/casual-1.jpg",
            (true, false),
            [
                "Effortlessly elegant midi dress in warm terracotta. Perfect for weekend brunches or casual Fridays.",
                "Soft cotton blend",
                "Machine wash gentle. Tumble dry low.",
                "Relaxed flowy fit. Very comfortable.",
            ],
        ),
        product(
            "6",
            "Wine A-Line Skirt",
            28_000,
            Category::Skirts,
            &["S", "M", "L", "XL"],
            &["Wine", "Black", "Cream"],
            "products/skirt-1.jpg",
            (false, false),
            [
                "Classic A-line skirt in rich wine color. Versatile piece that works from office to evening.",
                "Structured crepe",
                "Dry clean or hand wash cold.",
                "Sits at natural waist. Knee length.",
            ],
        ),
        product(
            "7",
            "Nude Elegance Pumps",
            45_000,
            Category::Shoes,
            &["37", "38", "39", "40", "41", "42"],
            &["Nude", "Black"],
            "products/shoes-1.jpg",
            (true, true),
            [
                "Sophisticated pointed-toe stilettos in classic nude. The perfect heel for every occasion.",
                "Premium patent leather",
                "Wipe with soft cloth. Store in dust bag.",
                "True to size. 4-inch heel.",
            ],
        ),
        product(
            "8",
            "Bordeaux Kelly Bag",
            95_000,
            Category::Bags,
            &["One Size"],
            &["Bordeaux", "Black", "Tan"],
            "products/bag-1.jpg",
            (true, true),
            [
                "Luxurious structured handbag with gold hardware. A timeless investment piece.",
                "Italian full-grain leather",
                "Store with tissue paper. Condition monthly.",
                "Medium size. Fits essentials plus tablet.",
            ],
        ),
    ]
}
