//! Data models for EasyBroker properties, pagination, and contact requests.

use serde::{Deserialize, Serialize};

/// A property as returned by the listings and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Public identifier (e.g. `EB-A1234`)
    pub public_id: String,
    /// Listing title
    pub title: String,
    /// Free-text description; the listings endpoint may omit it
    #[serde(default)]
    pub description: String,
    /// Full-size title image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_image_full: Option<String>,
    /// Thumbnail title image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_image_thumb: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Property type tag (e.g. "Casa", "Departamento")
    pub property_type: String,
    pub location: Location,
}

impl Property {
    /// Returns the best available image URL: full title image, thumbnail, then first gallery image.
    pub fn cover_image(&self) -> Option<&str> {
        self.title_image_full
            .as_deref()
            .or(self.title_image_thumb.as_deref())
            .or_else(|| self.images.first().map(|i| i.url.as_str()))
    }
}

/// Gallery image attached to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Location of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
}

/// Value of the `next_page` cursor field when more pages exist.
///
/// The API has been seen to return either a page number or a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NextPage {
    Number(u32),
    Url(String),
}

/// Pagination cursor for one page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
    pub total: u64,
    /// `None` (JSON `null` or absent) means there are no further pages.
    #[serde(default)]
    pub next_page: Option<NextPage>,
}

impl Pagination {
    /// Returns true if the cursor points at another page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One page of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pub pagination: Pagination,
    #[serde(default)]
    pub content: Vec<Property>,
}

impl PropertyList {
    /// Returns number of properties on this page.
    pub fn count(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the page has no properties.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A lead submitted for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub message: String,
    pub source: String,
}
