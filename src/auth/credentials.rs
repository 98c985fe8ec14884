//! Store API credentials.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::{ApiKey, Username};
use crate::error::ConfigError;

/// A source of store API credentials.
///
/// `Store` constructors accept any implementor, so credentials can come from
/// a config file, a secrets manager or a plain pair of strings.
pub trait Credentials {
    /// Returns the API username.
    fn username(&self) -> &str;

    /// Returns the API key.
    fn api_key(&self) -> &str;

    /// Returns the value of the `Authorization` header for these credentials.
    fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.username(), self.api_key());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

/// A validated username and API key pair.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{Credentials, SimpleCredentials};
///
/// let credentials = SimpleCredentials::new("admin", "secret-key").unwrap();
/// assert_eq!(credentials.authorization_header(), "Basic YWRtaW46c2VjcmV0LWtleQ==");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SimpleCredentials {
    username: Username,
    api_key: ApiKey,
}

impl SimpleCredentials {
    /// Creates credentials from raw strings, validating both halves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] or [`ConfigError::EmptyApiKey`]
    /// if either value is empty.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            username: Username::new(username)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    /// Creates credentials from already validated values.
    #[must_use]
    pub const fn from_parts(username: Username, api_key: ApiKey) -> Self {
        Self { username, api_key }
    }
}

impl Credentials for SimpleCredentials {
    fn username(&self) -> &str {
        self.username.as_ref()
    }

    fn api_key(&self) -> &str {
        self.api_key.as_ref()
    }
}

impl<C: Credentials + ?Sized> Credentials for &C {
    fn username(&self) -> &str {
        (**self).username()
    }

    fn api_key(&self) -> &str {
        (**self).api_key()
    }
}

impl fmt::Debug for SimpleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCredentials")
            .field("username", &self.username)
            .field("api_key", &self.api_key)
            .finish()
    }
}
