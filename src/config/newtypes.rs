//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Bigcommerce API username.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::Username;
///
/// let username = Username::new("admin").unwrap();
/// assert_eq!(username.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Bigcommerce API key.
///
/// The key is the password half of the store's Basic authentication pair.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated store API base URL.
///
/// The URL must be absolute, use the `http` or `https` scheme and name a
/// host. Trailing slashes are removed so that resource paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2/").unwrap();
/// assert_eq!(url.as_ref(), "https://store-abc.mybigcommerce.com/api/v2");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "store-abc.mybigcommerce.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    parsed: Url,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL is not an absolute
    /// `http`/`https` URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        let invalid = || ConfigError::InvalidStoreUrl {
            url: trimmed.to_string(),
        };

        let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid());
        }

        let url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self { url, parsed })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host name of the store.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for StoreUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty_string() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
        assert!(matches!(Username::new("   "), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_store_url_strips_trailing_slashes() {
        let url = StoreUrl::new("https://store-abc.mybigcommerce.com/api/v2//").unwrap();
        assert_eq!(url.as_ref(), "https://store-abc.mybigcommerce.com/api/v2");

        let url = StoreUrl::new("https://store-abc.mybigcommerce.com").unwrap();
        assert_eq!(url.as_ref(), "https://store-abc.mybigcommerce.com");
    }

    #[test]
    fn test_store_url_keeps_port() {
        let url = StoreUrl::new("http://127.0.0.1:8080/api/v2").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/api/v2");
    }

    #[test]
    fn test_store_url_rejects_invalid() {
        assert!(StoreUrl::new("").is_err());
        assert!(StoreUrl::new("store-abc.mybigcommerce.com").is_err());
        assert!(StoreUrl::new("ftp://store-abc.mybigcommerce.com").is_err());
        assert!(StoreUrl::new("https://").is_err());
        assert!(StoreUrl::new("https://store.example.com/api?x=1").is_err());
        assert!(StoreUrl::new("mailto:admin@example.com").is_err());
    }

    #[test]
    fn test_store_url_serializes_to_string() {
        let url = StoreUrl::new("https://store.example.com/api/v2").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""https://store.example.com/api/v2""#);

        let restored: StoreUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, url);
    }

    #[test]
    fn test_store_url_deserialize_rejects_invalid() {
        let result: Result<StoreUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(result.is_err());
    }
}
