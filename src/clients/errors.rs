//! HTTP-specific error types for the Bigcommerce API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::HttpError;
//!
//! match connection.get("/products").await {
//!     Ok(response) => println!("Got {} bytes", response.entity.len()),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is taken from the store's error payload when one is present,
/// otherwise it is the raw response body.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "The requested resource was not found.".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: The requested resource was not found.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message reported by the store.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidMethod {
///     method: "CONNECT".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Support for the HTTP method CONNECT is not provided.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Support for the HTTP method {method} is not provided.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// An entity was attached to a method that does not enclose one.
    #[error("Cannot send an entity with a {method} request.")]
    EntityNotAllowed {
        /// The HTTP method that rejected the entity.
        method: String,
    },

    /// The request URL could not be constructed or parsed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if this error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_invalid_request_error_entity_not_allowed() {
        let error = InvalidHttpRequestError::EntityNotAllowed {
            method: "GET".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send an entity with a GET request.");
    }

    #[test]
    fn test_invalid_request_error_invalid_url() {
        let error = InvalidHttpRequestError::InvalidUrl {
            url: "http://".to_string(),
        };
        assert!(error.to_string().contains("http://"));
    }

    #[test]
    fn test_http_error_status() {
        let error: HttpError = HttpResponseError {
            code: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(error.status(), Some(500));

        let error: HttpError = InvalidHttpRequestError::InvalidMethod {
            method: "FOO".to_string(),
        }
        .into();
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::InvalidUrl {
            url: String::new(),
        };
        let _ = invalid_error;
    }
}
