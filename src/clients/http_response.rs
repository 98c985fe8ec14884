//! HTTP response types for the Bigcommerce API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers and the body of a response in the format it was sent in.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::entity::Entity;
use crate::clients::http_headers::HttpHeaders;
use crate::xml::{self, XmlElement, XmlError};

/// A single entry of the store's error payload.
#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

/// An HTTP response, independent of any transport library.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{Entity, HttpHeaders, HttpResponse};
///
/// let response = HttpResponse::new(
///     200,
///     HttpHeaders::new(),
///     Entity::xml("<products><product><id>1</id></product></products>"),
/// );
///
/// assert!(response.is_ok());
/// let root = response.as_xml().unwrap();
/// assert_eq!(root.elements_by_tag_name("product").len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HttpHeaders,
    /// The response body.
    pub entity: Entity,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(status: u16, headers: HttpHeaders, entity: Entity) -> Self {
        Self {
            status,
            headers,
            entity,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` if the response carries no content.
    ///
    /// The store answers `204 No Content` for empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status == 204 || self.entity.is_empty()
    }

    /// Returns the media type of the body.
    ///
    /// The `Content-Type` header takes precedence over the entity's own type.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .or_else(|| self.entity.content_type())
    }

    /// Returns the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`std::str::Utf8Error`] if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        self.entity.as_text()
    }

    /// Parses the body as XML and returns the document's root element.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the body is not a well-formed XML document.
    pub fn as_xml(&self) -> Result<XmlElement, XmlError> {
        xml::parse(self.entity.content())
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body does not match `T`.
    pub fn as_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(self.entity.content())
    }

    /// Extracts the error message from the store's error payload.
    ///
    /// JSON payloads are arrays of `{"status": .., "message": ..}` objects and
    /// XML payloads are `<errors><error><message>` documents. The messages of
    /// every entry are joined with `"; "`. When the body is neither, the raw
    /// body text is returned, and an empty body yields `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        if self.entity.is_empty() {
            return None;
        }

        if let Ok(entries) = self.as_json::<Vec<ErrorEntry>>() {
            let messages: Vec<String> = entries.into_iter().filter_map(|e| e.message).collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        if let Ok(entry) = self.as_json::<ErrorEntry>() {
            if let Some(message) = entry.message {
                return Some(message);
            }
        }

        if let Ok(root) = self.as_xml() {
            let messages: Vec<&str> = root
                .elements_by_tag_name("message")
                .into_iter()
                .map(XmlElement::text)
                .filter(|m| !m.is_empty())
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }

        let text = String::from_utf8_lossy(self.entity.content());
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
