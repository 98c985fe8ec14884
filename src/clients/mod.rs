//! HTTP client types for Bigcommerce store communication.
//!
//! This module provides the HTTP layer between the [`Store`](crate::Store)
//! facade and a transport library. It models requests and responses
//! independently of the transport so that any [`HttpClient`] can be plugged
//! in.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The transport trait
//! - [`ReqwestHttpClient`]: The default transport, backed by `reqwest`
//! - [`Connection`]: Authenticated calls relative to a store's API base URL
//! - [`HttpRequest`]: A request to be sent to the store
//! - [`HttpResponse`]: A response with status, headers and body
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`HttpHeaders`]: Case-insensitive header multimap
//! - [`Entity`]: A message body with its content type
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{Connection, ReqwestHttpClient};
//! use bigcommerce_api::{ApiKey, StoreUrl, Username};
//!
//! let connection = Connection::new(
//!     StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2")?,
//!     &Username::new("admin")?,
//!     &ApiKey::new("secret-key")?,
//!     ReqwestHttpClient::new()?,
//! );
//!
//! let brands: Vec<serde_json::Value> = connection.get("/brands.json").await?.as_json()?;
//! ```

mod connection;
mod entity;
mod errors;
mod http_client;
mod http_headers;
mod http_request;
mod http_response;
mod reqwest_client;

pub use connection::Connection;
pub use entity::{Entity, JSON_CONTENT_TYPE, XML_CONTENT_TYPE};
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_headers::HttpHeaders;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use reqwest_client::ReqwestHttpClient;
