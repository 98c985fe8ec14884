//! XML payload support.
//!
//! Store responses in XML are parsed into an owned [`XmlElement`] tree which
//! resource types read their fields from.

mod element;
mod errors;

pub use element::{parse, XmlElement};
pub use errors::XmlError;
