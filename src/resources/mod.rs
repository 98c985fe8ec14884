//! Typed store resources.
//!
//! - [`Product`]: read from the XML `/products` payload
//! - [`Brand`]: deserialized from the JSON `/brands.json` payload

mod brand;
mod product;

pub use brand::Brand;
pub use product::Product;
