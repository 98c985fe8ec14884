//! Binary message bodies.

use serde::Serialize;

/// Content type sent with JSON entities.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type sent with XML entities.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// The body of an HTTP request or response.
///
/// An entity is an opaque byte buffer plus the media type describing it.
/// Responses always carry an entity, which is empty when the server sent no
/// body.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::Entity;
/// use serde_json::json;
///
/// let entity = Entity::json(&json!({"name": "Sony"})).unwrap();
/// assert_eq!(entity.content_type(), Some("application/json"));
/// assert_eq!(entity.as_text().unwrap(), r#"{"name":"Sony"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    content: Vec<u8>,
    content_type: Option<String>,
}

impl Entity {
    /// Creates an entity from raw bytes with no declared content type.
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }

    /// Creates an empty entity.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            content: Vec::new(),
            content_type: None,
        }
    }

    /// Creates a JSON entity by serializing `value`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::to_vec(value)?).with_content_type(JSON_CONTENT_TYPE))
    }

    /// Creates an XML entity from an already serialized document.
    #[must_use]
    pub fn xml(document: impl Into<String>) -> Self {
        Self::new(document.into()).with_content_type(XML_CONTENT_TYPE)
    }

    /// Sets the media type of the entity.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Returns the raw content.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consumes the entity, returning the raw content.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Returns the media type, if one was declared.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the entity has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`std::str::Utf8Error`] if the content is not valid UTF-8.
    pub fn as_text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.content)
    }
}

impl From<Vec<u8>> for Entity {
    fn from(content: Vec<u8>) -> Self {
        Self::new(content)
    }
}

impl From<String> for Entity {
    fn from(content: String) -> Self {
        Self::new(content).with_content_type("text/plain; charset=utf-8")
    }
}
