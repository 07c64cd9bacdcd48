//! Lookbook and store gallery images.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::GalleryImageId;

/// Gallery section an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Photoshoot,
    #[serde(rename = "New Drop")]
    NewDrop,
    Customer,
    Store,
}

impl GalleryCategory {
    pub const ALL: [Self; 4] = [Self::Photoshoot, Self::NewDrop, Self::Customer, Self::Store];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Photoshoot => "Photoshoot",
            Self::NewDrop => "New Drop",
            Self::Customer => "Customer",
            Self::Store => "Store",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| format!("invalid gallery category: {s}"))
    }
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub src: String,
    pub alt: String,
    pub category: GalleryCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Images in `images` matching `category`, order preserved. `None` keeps all.
#[must_use]
pub fn filter_gallery(
    images: &[GalleryImage],
    category: Option<GalleryCategory>,
) -> Vec<&GalleryImage> {
    images
        .iter()
        .filter(|img| category.is_none_or(|c| img.category == c))
        .collect()
}

/// The boutique's built-in gallery.
#[must_use]
pub fn bundled_gallery() -> Vec<GalleryImage> {
    let image = |id: &str, src: &str, alt: &str, category, caption: Option<&str>| GalleryImage {
        id: GalleryImageId::new(id),
        src: src.to_owned(),
        alt: alt.to_owned(),
        category,
        caption: caption.map(str::to_owned),
    };

    vec![
        image(
            "1",
            "gallery/lookbook-1.jpg",
            "African woman in elegant corporate dress with Abuja skyline",
            GalleryCategory::Photoshoot,
            Some("Golden Hour in Abuja"),
        ),
        image(
            "2",
            "gallery/lookbook-2.jpg",
            "Nigerian woman in stylish two-piece outfit",
            GalleryCategory::NewDrop,
            Some("Power Dressing Collection"),
        ),
        image(
            "3",
            "gallery/lookbook-3.jpg",
            "Model in flowing evening gown",
            GalleryCategory::Photoshoot,
            Some("Evening Elegance"),
        ),
        image(
            "4",
            "gallery/store-1.jpg",
            "Boutique interior with curated racks",
            GalleryCategory::Store,
            None,
        ),
        image(
            "5",
            "gallery/store-2.jpg",
            "Fitting area at the boutique",
            GalleryCategory::Store,
            None,
        ),
        image(
            "6",
            "gallery/customer-1.jpg",
            "Happy customer in a burgundy gown",
            GalleryCategory::Customer,
            Some("Our Jazz Queens"),
        ),
        image(
            "7",
            "gallery/customer-2.jpg",
            "Customer styled for a corporate event",
            GalleryCategory::Customer,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_none_keeps_everything() {
        let images = bundled_gallery();
        assert_eq!(filter_gallery(&images, None).len(), images.len());
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let images = bundled_gallery();
        let ids: Vec<&str> = filter_gallery(&images, Some(GalleryCategory::Store))
            .iter()
            .map(|img| img.id.as_str())
            .collect();
        assert_eq!(ids, ["4", "5"]);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("new-drop".parse::<GalleryCategory>(), Ok(GalleryCategory::NewDrop));
        assert_eq!("Photoshoot".parse::<GalleryCategory>(), Ok(GalleryCategory::Photoshoot));
        assert!("Runway".parse::<GalleryCategory>().is_err());
    }
}
