//! HTTP request types for the Bigcommerce API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing transport-independent requests.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::clients::entity::Entity;
use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::http_headers::HttpHeaders;

/// HTTP methods supported by the SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP OPTIONS method for capability discovery.
    Options,
    /// HTTP TRACE method for loop-back diagnostics.
    Trace,
    /// HTTP HEAD method for retrieving headers only.
    Head,
}

impl HttpMethod {
    /// Every supported method.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Options,
        Self::Trace,
        Self::Head,
    ];

    /// Returns the upper-case verb.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Head => "HEAD",
        }
    }

    /// Returns `true` for methods whose requests enclose an entity.
    #[must_use]
    pub const fn allows_entity(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            })
    }
}

/// An HTTP request, independent of any transport library.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{Entity, HttpMethod, HttpRequest};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://store.example.com/api/v2/products")
///     .header("Accept", "application/xml")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://store.example.com/api/v2/brands.json")
///     .entity(Entity::json(&serde_json::json!({"name": "Sony"})).unwrap())
///     .build()
///     .unwrap();
///
/// assert!(post_request.entity.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL of this request.
    pub url: Url,
    /// Headers to send with the request.
    pub headers: HttpHeaders,
    /// The request body, if any.
    pub entity: Option<Entity>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Creates a request without headers or entity.
    #[must_use]
    pub const fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HttpHeaders::new(),
            entity: None,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EntityNotAllowed`] if an entity is
    /// attached to a method that does not enclose one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.entity.is_some() && !self.method.allows_entity() {
            return Err(InvalidHttpRequestError::EntityNotAllowed {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    url: String,
    headers: HttpHeaders,
    entity: Option<Entity>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HttpHeaders::new(),
            entity: None,
        }
    }

    /// Sets a header, replacing any previous value with the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges a set of headers into the request.
    #[must_use]
    pub fn headers(mut self, headers: &HttpHeaders) -> Self {
        self.headers.extend_replacing(headers);
        self
    }

    /// Sets the request entity.
    #[must_use]
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidUrl`] if the URL does not
    /// parse, or any error from [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let url = Url::parse(&self.url)
            .map_err(|_| InvalidHttpRequestError::InvalidUrl { url: self.url })?;
        let request = HttpRequest {
            method: self.method,
            url,
            headers: self.headers,
            entity: self.entity,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://store.example.com/api/v2/products";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
        assert_eq!(HttpMethod::Head.to_string(), "HEAD");
    }

    #[test]
    fn test_http_method_from_str_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Trace".parse::<HttpMethod>().unwrap(), HttpMethod::Trace);
        assert_eq!(" DELETE ".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn test_http_method_from_str_rejects_unknown() {
        let result = "CONNECT".parse::<HttpMethod>();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidMethod { method }) if method == "CONNECT"
        ));
    }

    #[test]
    fn test_only_post_put_patch_allow_entity() {
        let enclosing: Vec<HttpMethod> = HttpMethod::ALL
            .into_iter()
            .filter(HttpMethod::allows_entity)
            .collect();
        assert_eq!(
            enclosing,
            vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch]
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .header("Accept", "application/xml")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), URL);
        assert_eq!(request.headers.get("accept"), Some("application/xml"));
        assert!(request.entity.is_none());
    }

    #[test]
    fn test_builder_accepts_entity_on_put() {
        let request = HttpRequest::builder(HttpMethod::Put, URL)
            .entity(Entity::xml("<product/>"))
            .build()
            .unwrap();

        assert!(request.entity.is_some());
    }

    #[test]
    fn test_builder_rejects_entity_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .entity(Entity::new(b"body".to_vec()))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::EntityNotAllowed { method }) if method == "GET"
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = HttpRequest::builder(HttpMethod::Get, "not a url").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidUrl { url }) if url == "not a url"
        ));
    }

    #[test]
    fn test_builder_merges_headers() {
        let defaults: HttpHeaders = [("Accept", "application/xml"), ("User-Agent", "sdk")]
            .into_iter()
            .collect();

        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .headers(&defaults)
            .header("accept", "application/json")
            .build()
            .unwrap();

        assert_eq!(request.headers.get("Accept"), Some("application/json"));
        assert_eq!(request.headers.get("User-Agent"), Some("sdk"));
    }
}
