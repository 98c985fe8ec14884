//! Authenticated calls against a store's API base URL.

use crate::auth::{Credentials, SimpleCredentials};
use crate::clients::entity::{Entity, JSON_CONTENT_TYPE, XML_CONTENT_TYPE};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_client::{HttpClient, SDK_VERSION};
use crate::clients::http_headers::HttpHeaders;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::reqwest_client::ReqwestHttpClient;
use crate::config::{ApiKey, StoreUrl, Username};

/// An authenticated connection to a store.
///
/// Every request carries the default headers (`Authorization` and
/// `User-Agent`) plus an `Accept` header chosen from the path: paths ending
/// in `.json` ask for JSON, all others for XML.
///
/// Responses outside the 2xx range are returned as
/// [`HttpError::Response`], with the message taken from the store's error
/// payload.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::{Connection, ReqwestHttpClient};
/// use bigcommerce_api::{ApiKey, StoreUrl, Username};
///
/// let connection = Connection::new(
///     StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2")?,
///     &Username::new("admin")?,
///     &ApiKey::new("secret-key")?,
///     ReqwestHttpClient::new()?,
/// );
///
/// let root = connection.get("/products").await?.as_xml()?;
/// ```
#[derive(Debug)]
pub struct Connection<C: HttpClient = ReqwestHttpClient> {
    base_url: StoreUrl,
    default_headers: HttpHeaders,
    client: C,
}

impl<C: HttpClient> Connection<C> {
    /// Creates a connection that authenticates as `username` with `api_key`.
    #[must_use]
    pub fn new(store_url: StoreUrl, username: &Username, api_key: &ApiKey, http_client: C) -> Self {
        let credentials = SimpleCredentials::from_parts(username.clone(), api_key.clone());

        let mut default_headers = HttpHeaders::new();
        default_headers.insert("Authorization", credentials.authorization_header());
        default_headers.insert("User-Agent", user_agent(None));

        Self {
            base_url: store_url,
            default_headers,
            client: http_client,
        }
    }

    /// Prefixes the `User-Agent` header with `prefix`.
    #[must_use]
    pub fn with_user_agent_prefix(mut self, prefix: &str) -> Self {
        self.default_headers
            .insert("User-Agent", user_agent(Some(prefix)));
        self
    }

    /// Returns the API base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &StoreUrl {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HttpHeaders {
        &self.default_headers
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &C {
        &self.client
    }

    /// Returns the absolute URL for `path`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a `GET` request.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    pub async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Get, path, None).await
    }

    /// Sends a `POST` request with `entity` as the body.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    pub async fn post(&self, path: &str, entity: Entity) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Post, path, Some(entity)).await
    }

    /// Sends a `PUT` request with `entity` as the body.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    pub async fn put(&self, path: &str, entity: Entity) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Put, path, Some(entity)).await
    }

    /// Sends a `DELETE` request.
    ///
    /// # Errors
    ///
    /// See [`Connection::request`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Delete, path, None).await
    }

    /// Sends a request to `path` relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the URL is invalid or an
    /// entity is given for a method that does not enclose one,
    /// [`HttpError::Network`] if the transport fails, and
    /// [`HttpError::Response`] for responses outside the 2xx range.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        entity: Option<Entity>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, self.url_for(path))
            .headers(&self.default_headers)
            .header("Accept", accept_for(path));
        if let Some(entity) = entity {
            builder = builder.entity(entity);
        }
        let request = builder.build()?;

        let response = self.client.execute(request).await?;
        if response.is_ok() {
            return Ok(response);
        }

        let code = response.status;
        let message = response
            .error_message()
            .unwrap_or_else(|| format!("request failed with status {code}"));
        tracing::warn!(%method, path, code, %message, "store returned an error response");

        Err(HttpResponseError { code, message }.into())
    }
}

fn user_agent(prefix: Option<&str>) -> String {
    let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("{prefix}Bigcommerce API Library v{SDK_VERSION} | Rust {rust_version}")
}

fn accept_for(path: &str) -> &'static str {
    let resource = path.split(['?', '#']).next().unwrap_or(path);
    if resource.ends_with(".json") {
        JSON_CONTENT_TYPE
    } else {
        XML_CONTENT_TYPE
    }
}
