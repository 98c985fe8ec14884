//! Product resource.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::xml::{XmlElement, XmlError};

/// A catalog product.
///
/// Prices and weight are kept as the decimal strings the store sends so no
/// precision is lost. Empty elements in the payload are read as `None`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{xml, Product};
///
/// let element = xml::parse(b"<product><id>32</id><name>Red scarf</name><price>19.9900</price></product>").unwrap();
/// let product = Product::from_xml(&element).unwrap();
///
/// assert_eq!(product.id, 32);
/// assert_eq!(product.name.as_deref(), Some("Red scarf"));
/// assert_eq!(product.price.as_deref(), Some("19.9900"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    pub id: u64,

    /// The product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The product description, usually HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `physical` or `digital`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The cost price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<String>,

    /// The retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<String>,

    /// The sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,

    /// Units in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// The product weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Whether the product is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Whether the product is featured on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// `available`, `disabled` or `preorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// The brand this product belongs to. `0` in the payload means no brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,

    /// IDs of the categories this product is listed in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<u64>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<FixedOffset>>,

    /// When the product was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<FixedOffset>>,
}

impl Product {
    /// Reads a product from a `<product>` element.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::MissingElement`] if `id` is absent and
    /// [`XmlError::ParseError`] if a numeric, boolean or date field cannot
    /// be parsed.
    pub fn from_xml(element: &XmlElement) -> Result<Self, XmlError> {
        let id = parse_field::<u64>(element, "id")?
            .ok_or_else(|| XmlError::MissingElement("product/id".to_string()))?;

        let categories = element
            .child("categories")
            .map(|categories| {
                categories
                    .children_named("value")
                    .map(|value| parse_value::<u64>("categories/value", value.text()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id,
            name: string_field(element, "name"),
            sku: string_field(element, "sku"),
            description: string_field(element, "description"),
            product_type: string_field(element, "type"),
            price: string_field(element, "price"),
            cost_price: string_field(element, "cost_price"),
            retail_price: string_field(element, "retail_price"),
            sale_price: string_field(element, "sale_price"),
            inventory_level: parse_field(element, "inventory_level")?,
            weight: string_field(element, "weight"),
            is_visible: bool_field(element, "is_visible")?,
            is_featured: bool_field(element, "is_featured")?,
            availability: string_field(element, "availability"),
            brand_id: parse_field::<u64>(element, "brand_id")?.filter(|id| *id != 0),
            categories,
            date_created: date_field(element, "date_created")?,
            date_modified: date_field(element, "date_modified")?,
        })
    }
}

fn text<'a>(element: &'a XmlElement, name: &str) -> Option<&'a str> {
    element.child_text(name).filter(|text| !text.is_empty())
}

fn string_field(element: &XmlElement, name: &str) -> Option<String> {
    text(element, name).map(str::to_string)
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, XmlError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| XmlError::ParseError(format!("<{name}> '{raw}': {e}")))
}

fn parse_field<T>(element: &XmlElement, name: &str) -> Result<Option<T>, XmlError>
where
    T: FromStr,
    T::Err: Display,
{
    text(element, name)
        .map(|raw| parse_value(name, raw))
        .transpose()
}

fn bool_field(element: &XmlElement, name: &str) -> Result<Option<bool>, XmlError> {
    text(element, name)
        .map(|raw| match raw {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(XmlError::ParseError(format!(
                "<{name}> '{other}': expected a boolean"
            ))),
        })
        .transpose()
}

fn date_field(
    element: &XmlElement,
    name: &str,
) -> Result<Option<DateTime<FixedOffset>>, XmlError> {
    text(element, name)
        .map(|raw| {
            DateTime::parse_from_rfc2822(raw)
                .map_err(|e| XmlError::ParseError(format!("<{name}> '{raw}': {e}")))
        })
        .transpose()
}
