//! Store-level error types.

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::xml::XmlError;

/// Errors returned by [`Store`](crate::Store) operations.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::StoreError;
///
/// match store.get_product(42).await {
///     Ok(product) => println!("{:?}", product.name),
///     Err(StoreError::NotFound { resource, id }) => println!("no {resource} {id}"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store URL or credentials are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed or the store answered with an error status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An XML payload could not be read.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A JSON payload could not be deserialized.
    #[error("JSON payload error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested resource does not exist.
    #[error("{resource} {id} was not found.")]
    NotFound {
        /// The kind of resource requested (e.g., `"product"`).
        resource: &'static str,
        /// The requested ID.
        id: u64,
    },
}
