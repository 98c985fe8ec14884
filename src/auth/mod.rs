//! Authentication types for the Bigcommerce API SDK.
//!
//! Stores authenticate legacy API calls with HTTP Basic authentication:
//! the username of a store API account paired with its API key.
//!
//! # Overview
//!
//! - [`Credentials`]: Anything that can supply a username and API key
//! - [`SimpleCredentials`]: A plain, validated username + API key pair
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{Credentials, SimpleCredentials};
//!
//! let credentials = SimpleCredentials::new("admin", "my-api-key").unwrap();
//! assert_eq!(credentials.username(), "admin");
//! assert!(credentials.authorization_header().starts_with("Basic "));
//! ```

mod credentials;

pub use credentials::{Credentials, SimpleCredentials};
