//! The transport seam between the SDK and an HTTP library.
//!
//! [`HttpClient`] is the only thing [`Connection`](crate::clients::Connection)
//! needs from a transport. The SDK ships
//! [`ReqwestHttpClient`](crate::clients::ReqwestHttpClient); tests and
//! applications can supply their own.

use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Executes [`HttpRequest`]s and returns [`HttpResponse`]s.
///
/// Implementations return `Ok` for every response the server sent, whatever
/// its status code. Only failures to produce a response (invalid request,
/// network error) are errors at this layer.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{
///     Entity, HttpClient, HttpError, HttpHeaders, HttpRequest, HttpResponse,
/// };
///
/// struct Canned;
///
/// impl HttpClient for Canned {
///     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(204, HttpHeaders::new(), Entity::empty()))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait HttpClient: Send + Sync {
    /// Sends `request` and returns the server's response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation
    /// and [`HttpError::Network`] if no response could be obtained.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).execute(request).await
    }
}
