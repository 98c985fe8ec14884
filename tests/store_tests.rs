//! Integration tests for the Store facade.
//!
//! These tests exercise the full chain from `Store` through the reqwest
//! transport against a mock store API.

use bigcommerce_api::{
    ApiKey, HttpError, SimpleCredentials, Store, StoreConfig, StoreError, StoreUrl, Username,
};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `admin:secret-key`, Base64 encoded.
const AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0LWtleQ==";

const PRODUCTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<products>
  <product>
    <id>32</id>
    <name>Red scarf</name>
    <sku>SCARF-RED</sku>
    <price>19.9900</price>
    <inventory_level>12</inventory_level>
    <is_visible>true</is_visible>
    <brand_id>3</brand_id>
    <categories>
      <value>19</value>
    </categories>
    <date_created>Tue, 20 Nov 2012 00:00:00 +0000</date_created>
  </product>
  <product>
    <id>33</id>
    <name>Salt &amp; Pepper set</name>
    <sku/>
    <brand_id>0</brand_id>
  </product>
</products>"#;

/// Creates a store pointed at the mock server.
fn create_test_store(server: &MockServer) -> Store {
    let credentials = SimpleCredentials::new("admin", "secret-key").unwrap();
    Store::new(&format!("{}/api/v2", server.uri()), &credentials).unwrap()
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_get_products_parses_xml_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Accept", "application/xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PRODUCTS_XML, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let products = store.get_products().await.unwrap();

    assert_eq!(products.len(), 2);

    let scarf = &products[0];
    assert_eq!(scarf.id, 32);
    assert_eq!(scarf.name.as_deref(), Some("Red scarf"));
    assert_eq!(scarf.price.as_deref(), Some("19.9900"));
    assert_eq!(scarf.inventory_level, Some(12));
    assert_eq!(scarf.is_visible, Some(true));
    assert_eq!(scarf.brand_id, Some(3));
    assert_eq!(scarf.categories, vec![19]);
    assert!(scarf.date_created.is_some());

    let set = &products[1];
    assert_eq!(set.id, 33);
    assert_eq!(set.name.as_deref(), Some("Salt & Pepper set"));
    assert!(set.sku.is_none());
    assert!(set.brand_id.is_none());
}

#[tokio::test]
async fn test_get_products_no_content_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let products = store.get_products().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_products_malformed_xml_is_xml_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<products><product>", "application/xml"),
        )
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let result = store.get_products().await;

    assert!(matches!(result, Err(StoreError::Xml(_))));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products/32"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<product><id>32</id><name>Red scarf</name></product>",
            "application/xml",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let product = store.get_product(32).await.unwrap();

    assert_eq!(product.id, 32);
    assert_eq!(product.name.as_deref(), Some("Red scarf"));
}

#[tokio::test]
async fn test_get_product_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!([
            {"status": 404, "message": "The requested resource was not found."}
        ])))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let result = store.get_product(404).await;

    assert!(matches!(
        result,
        Err(StoreError::NotFound {
            resource: "product",
            id: 404
        })
    ));
}

// ============================================================================
// Brands
// ============================================================================

#[tokio::test]
async fn test_get_brands_parses_json_through_authenticated_connection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/brands.json"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Sony", "page_title": "Sony", "image_file": null},
            {"id": 2, "name": "Apple", "search_keywords": "mac,iphone"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let brands = store.get_brands().await.unwrap();

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[0].id, 1);
    assert_eq!(brands[0].page_title.as_deref(), Some("Sony"));
    assert!(brands[0].image_file.is_none());
    assert_eq!(brands[1].search_keywords.as_deref(), Some("mac,iphone"));
}

#[tokio::test]
async fn test_get_brands_no_content_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/brands.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let store = create_test_store(&server);

    assert!(store.get_brands().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_brand_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/brands/7.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7, "name": "Levi's"})),
        )
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let brand = store.get_brand(7).await.unwrap();

    assert_eq!(brand.id, 7);
    assert_eq!(brand.name.as_deref(), Some("Levi's"));
}

// ============================================================================
// Errors and Configuration
// ============================================================================

#[tokio::test]
async fn test_unauthorized_response_carries_store_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(ResponseTemplate::new(401).set_body_raw(
            "<?xml version=\"1.0\"?><errors><error><status>401</status><message>No credentials were supplied in the request.</message></error></errors>",
            "application/xml",
        ))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let error = store.get_products().await.unwrap_err();

    match error {
        StoreError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.message, "No credentials were supplied in the request.");
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_from_config_sends_user_agent_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/brands.json"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header(
            "User-Agent",
            format!(
                "Inventory/2.1 | Bigcommerce API Library v{} | Rust {}",
                bigcommerce_api::clients::SDK_VERSION,
                env!("CARGO_PKG_RUST_VERSION")
            )
            .as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = StoreConfig::builder()
        .store_url(StoreUrl::new(format!("{}/api/v2/", server.uri())).unwrap())
        .username(Username::new("admin").unwrap())
        .api_key(ApiKey::new("secret-key").unwrap())
        .user_agent_prefix("Inventory/2.1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let store = Store::from_config(&config).unwrap();

    assert!(store.get_brands().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_from_api_key_rejects_invalid_url() {
    let result = Store::from_api_key("store-abc.mybigcommerce.com", "admin", "secret-key");

    assert!(matches!(
        result,
        Err(StoreError::Config(
            bigcommerce_api::ConfigError::InvalidStoreUrl { .. }
        ))
    ));
}
