//! Configuration types for the Bigcommerce API SDK.
//!
//! This module provides the configuration types used to connect to a store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The configuration struct holding all SDK settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`StoreUrl`]: A validated store API base URL
//! - [`Username`]: A validated API username newtype
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{StoreConfig, StoreUrl, Username, ApiKey};
//!
//! let config = StoreConfig::builder()
//!     .store_url(StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, StoreUrl, Username};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for connecting to a Bigcommerce store.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bigcommerce_api::{StoreConfig, StoreUrl, Username, ApiKey};
///
/// let config = StoreConfig::builder()
///     .store_url(StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2").unwrap())
///     .username(Username::new("admin").unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    store_url: StoreUrl,
    username: Username,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the store API base URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the API username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// Required fields are `store_url`, `username` and `api_key`.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport default)
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    store_url: Option<StoreUrl>,
    username: Option<Username>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store API base URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the API username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url`,
    /// `username` or `api_key` are not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StoreConfig {
            store_url,
            username,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
