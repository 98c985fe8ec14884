//! The [`Store`] facade.
//!
//! A `Store` holds an authenticated [`Connection`] to one store and exposes
//! its resources as typed values.

mod errors;

pub use errors::StoreError;

use crate::auth::{Credentials, SimpleCredentials};
use crate::clients::{Connection, HttpClient, HttpError, HttpResponse, ReqwestHttpClient};
use crate::config::{ApiKey, StoreConfig, StoreUrl, Username};
use crate::resources::{Brand, Product};
use crate::xml::XmlError;

/// Facade for accessing a Bigcommerce store via the REST API.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::Store;
///
/// let store = Store::from_api_key(
///     "https://store-abc.mybigcommerce.com/api/v2",
///     "admin",
///     "secret-key",
/// )?;
///
/// for product in store.get_products().await? {
///     println!("{}: {:?}", product.id, product.name);
/// }
/// ```
#[derive(Debug)]
pub struct Store<C: HttpClient = ReqwestHttpClient> {
    url: StoreUrl,
    connection: Connection<C>,
}

impl Store {
    /// Creates a store that authenticates with any [`Credentials`]
    /// implementor and sends requests with [`ReqwestHttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL or credentials are invalid
    /// and [`StoreError::Http`] if the HTTP client cannot be created.
    pub fn new(url: &str, credentials: &impl Credentials) -> Result<Self, StoreError> {
        Self::with_http_client(url, credentials, ReqwestHttpClient::new()?)
    }

    /// Creates a store from a username and API key.
    ///
    /// # Errors
    ///
    /// See [`Store::new`].
    pub fn from_api_key(url: &str, username: &str, api_key: &str) -> Result<Self, StoreError> {
        let credentials = SimpleCredentials::new(username, api_key)?;
        Self::new(url, &credentials)
    }

    /// Creates a store from a validated [`StoreConfig`].
    ///
    /// The configured timeout and `User-Agent` prefix are applied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the HTTP client cannot be created.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = match config.timeout() {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
            None => ReqwestHttpClient::new()?,
        };

        let mut connection = Connection::new(
            config.store_url().clone(),
            config.username(),
            config.api_key(),
            client,
        );
        if let Some(prefix) = config.user_agent_prefix() {
            connection = connection.with_user_agent_prefix(prefix);
        }

        Ok(Self {
            url: config.store_url().clone(),
            connection,
        })
    }
}

impl<C: HttpClient> Store<C> {
    /// Creates a store that sends requests through `http_client`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL or credentials are invalid.
    pub fn with_http_client(
        url: &str,
        credentials: &impl Credentials,
        http_client: C,
    ) -> Result<Self, StoreError> {
        let url = StoreUrl::new(url)?;
        let username = Username::new(credentials.username())?;
        let api_key = ApiKey::new(credentials.api_key())?;

        let connection = Connection::new(url.clone(), &username, &api_key, http_client);

        Ok(Self { url, connection })
    }

    /// Returns the store API base URL.
    #[must_use]
    pub const fn url(&self) -> &StoreUrl {
        &self.url
    }

    /// Returns the underlying connection for requests without a typed helper.
    #[must_use]
    pub const fn connection(&self) -> &Connection<C> {
        &self.connection
    }

    /// Returns every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the request fails and
    /// [`StoreError::Xml`] if the payload cannot be read.
    pub async fn get_products(&self) -> Result<Vec<Product>, StoreError> {
        let response = self.connection.get("/products").await?;
        if response.is_empty() {
            tracing::debug!("store has no products");
            return Ok(Vec::new());
        }

        let root = response.as_xml()?;
        let products = root
            .elements_by_tag_name("product")
            .into_iter()
            .map(Product::from_xml)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    /// Returns the product with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the store has no such product,
    /// otherwise as [`Store::get_products`].
    pub async fn get_product(&self, id: u64) -> Result<Product, StoreError> {
        let response = self.lookup("product", id, &format!("/products/{id}")).await?;

        let root = response.as_xml()?;
        let element = if root.name() == "product" {
            &root
        } else {
            root.elements_by_tag_name("product")
                .into_iter()
                .next()
                .ok_or_else(|| XmlError::MissingElement("product".to_string()))?
        };

        Ok(Product::from_xml(element)?)
    }

    /// Returns every brand.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the request fails and
    /// [`StoreError::Json`] if the payload cannot be deserialized.
    pub async fn get_brands(&self) -> Result<Vec<Brand>, StoreError> {
        let response = self.connection.get("/brands.json").await?;
        if response.is_empty() {
            tracing::debug!("store has no brands");
            return Ok(Vec::new());
        }

        Ok(response.as_json()?)
    }

    /// Returns the brand with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the store has no such brand,
    /// otherwise as [`Store::get_brands`].
    pub async fn get_brand(&self, id: u64) -> Result<Brand, StoreError> {
        let response = self.lookup("brand", id, &format!("/brands/{id}.json")).await?;
        Ok(response.as_json()?)
    }

    async fn lookup(
        &self,
        resource: &'static str,
        id: u64,
        path: &str,
    ) -> Result<HttpResponse, StoreError> {
        match self.connection.get(path).await {
            Ok(response) if response.is_empty() => Err(StoreError::NotFound { resource, id }),
            Ok(response) => Ok(response),
            Err(HttpError::Response(e)) if e.code == 404 => {
                Err(StoreError::NotFound { resource, id })
            }
            Err(e) => Err(e.into()),
        }
    }
}
