//! [`HttpClient`] implementation backed by `reqwest`.
//!
//! The adapter maps the SDK's request model onto `reqwest` verb by verb,
//! copies headers in both directions and passes entity bodies through.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::clients::entity::Entity;
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_headers::HttpHeaders;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// An [`HttpClient`] that sends requests with `reqwest`.
///
/// # Thread Safety
///
/// `ReqwestHttpClient` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::{HttpClient, HttpMethod, HttpRequest, ReqwestHttpClient};
///
/// let client = ReqwestHttpClient::new()?;
/// let request = HttpRequest::builder(HttpMethod::Get, "https://store.example.com/api/v2/time")
///     .build()?;
/// let response = client.execute(request).await?;
/// println!("{}", response.status);
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

// Verify ReqwestHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestHttpClient>();
};

impl ReqwestHttpClient {
    /// Creates a client with the transport's default settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        Self::build(None)
    }

    /// Creates a client that aborts requests after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        Self::build(Some(timeout))
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    fn map_request(&self, source: HttpRequest) -> reqwest::RequestBuilder {
        let HttpRequest {
            method,
            url,
            headers,
            entity,
        } = source;

        let mut target = self.client.request(transport_method(method), url);
        for (name, value) in headers.iter() {
            target = target.header(name, value);
        }

        if method.allows_entity() {
            if let Some(entity) = entity {
                if !headers.contains("content-type") {
                    if let Some(content_type) = entity.content_type() {
                        target = target.header(CONTENT_TYPE, content_type);
                    }
                }
                target = target.body(entity.into_content());
            }
        }

        target
    }

    async fn map_response(source: reqwest::Response) -> Result<HttpResponse, HttpError> {
        let status = source.status().as_u16();

        let mut headers = HttpHeaders::new();
        for (name, value) in source.headers() {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        let content_type = headers.get("content-type").map(str::to_string);
        let body = source.bytes().await?;

        let mut entity = Entity::new(body.to_vec());
        if let Some(content_type) = content_type {
            entity = entity.with_content_type(content_type);
        }

        Ok(HttpResponse::new(status, headers, entity))
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let method = request.method;
        let url = request.url.to_string();

        let response = self.map_request(request).send().await?;
        let response = Self::map_response(response).await?;

        tracing::debug!(%method, %url, status = response.status, "executed request");

        Ok(response)
    }
}

/// Maps an SDK method onto the transport's method type.
fn transport_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Trace => Method::TRACE,
        HttpMethod::Head => Method::HEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_method_maps_every_verb() {
        for method in HttpMethod::ALL {
            assert_eq!(transport_method(method).as_str(), method.as_str());
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestHttpClient>();
    }

    #[test]
    fn test_map_request_copies_headers_and_entity() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = HttpRequest::builder(HttpMethod::Post, "https://store.example.com/api/v2/brands.json")
            .header("Accept", "application/json")
            .header("X-Custom", "value")
            .entity(Entity::json(&serde_json::json!({"name": "Sony"})).unwrap())
            .build()
            .unwrap();

        let built = client.map_request(request).build().unwrap();

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.url().as_str(), "https://store.example.com/api/v2/brands.json");
        assert_eq!(built.headers()["accept"], "application/json");
        assert_eq!(built.headers()["x-custom"], "value");
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            built.body().and_then(reqwest::Body::as_bytes),
            Some(br#"{"name":"Sony"}"#.as_slice())
        );
    }

    #[test]
    fn test_map_request_keeps_explicit_content_type() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = HttpRequest::builder(HttpMethod::Put, "https://store.example.com/api/v2/products/1")
            .header("Content-Type", "text/xml")
            .entity(Entity::xml("<product/>"))
            .build()
            .unwrap();

        let built = client.map_request(request).build().unwrap();

        let content_types: Vec<_> = built.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0], "text/xml");
    }

    #[test]
    fn test_map_request_copies_repeated_headers() {
        let client = ReqwestHttpClient::new().unwrap();
        let mut request =
            HttpRequest::builder(HttpMethod::Get, "https://store.example.com/api/v2/products")
                .build()
                .unwrap();
        request.headers.append("X-Tag", "a");
        request.headers.append("X-Tag", "b");

        let built = client.map_request(request).build().unwrap();

        let tags: Vec<_> = built
            .headers()
            .get_all("x-tag")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }
}
