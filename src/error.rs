//! Error types for the Bigcommerce API SDK.
//!
//! This module contains the error type used for configuration and
//! credential validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API username cannot be empty.
    #[error("API username cannot be empty. Please provide the username of a store API account.")]
    EmptyUsername,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Bigcommerce API key.")]
    EmptyApiKey,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://store-abc.mybigcommerce.com/api/v2').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
