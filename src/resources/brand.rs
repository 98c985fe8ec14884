//! Brand resource.

use serde::{Deserialize, Serialize};

/// A product brand, as returned by `/brands.json`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::Brand;
///
/// let brand: Brand = serde_json::from_str(r#"{"id": 3, "name": "Sony"}"#).unwrap();
/// assert_eq!(brand.id, 3);
/// assert_eq!(brand.name.as_deref(), Some("Sony"));
/// assert!(brand.page_title.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Brand {
    /// The unique identifier of the brand.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: u64,

    /// The name of the brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The title shown in the browser for the brand's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// Comma-separated meta keywords for the brand's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    /// The meta description for the brand's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// The brand's logo image file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,

    /// Keywords the storefront search matches against this brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
}
