//! # Bigcommerce API Rust SDK
//!
//! A Rust SDK for the Bigcommerce store REST API, providing type-safe
//! configuration, HTTP Basic authentication and typed access to store
//! resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Validated newtypes for store URLs and API credentials
//! - A [`Credentials`] trait so credentials can come from anywhere
//! - A transport-independent HTTP model with a `reqwest` adapter
//! - The [`Store`] facade returning [`Product`] and [`Brand`] values
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{ApiKey, StoreConfig, StoreUrl, Username};
//!
//! let config = StoreConfig::builder()
//!     .store_url(StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading Resources
//!
//! ```rust,ignore
//! use bigcommerce_api::{SimpleCredentials, Store};
//!
//! let credentials = SimpleCredentials::new("admin", "your-api-key")?;
//! let store = Store::new("https://store-abc.mybigcommerce.com/api/v2", &credentials)?;
//!
//! // XML payload, one `Product` per `<product>` element
//! let products = store.get_products().await?;
//!
//! // JSON payload
//! let brands = store.get_brands().await?;
//! ```
//!
//! ## Custom Transports
//!
//! [`Store`] is generic over [`clients::HttpClient`]. Any implementor can
//! replace the default [`clients::ReqwestHttpClient`]:
//!
//! ```rust,ignore
//! use bigcommerce_api::{SimpleCredentials, Store};
//!
//! let store = Store::with_http_client(url, &credentials, MyClient::default())?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod store;
pub mod xml;

// Re-export public types at crate root for convenience
pub use auth::{Credentials, SimpleCredentials};
pub use config::{ApiKey, StoreConfig, StoreConfigBuilder, StoreUrl, Username};
pub use error::ConfigError;
pub use resources::{Brand, Product};
pub use store::{Store, StoreError};

// Re-export HTTP client types
pub use clients::{
    Connection, Entity, HttpClient, HttpError, HttpHeaders, HttpMethod, HttpRequest,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, ReqwestHttpClient,
};
