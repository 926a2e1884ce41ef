//! Integration tests for `CatalogClient` using wiremock HTTP mocks.
//!
//! Covers the typed `get_*` layer (status and decode errors) and the
//! failure-absorbing `fetch_*` layer (fallback values).

use serde_json::json;
use shelfscope_catalog::{CatalogClient, CatalogError};
use shelfscope_core::listing::NO_PUBLIC_DESCRIPTION;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::with_base_url(base_url, 5, "shelfscope-test/0.1")
        .expect("client construction should not fail")
}

fn item_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Camiseta Básica",
        "price": 49.9,
        "currency_id": "BRL",
        "category_id": "MLB31447",
        "seller_id": 998_877,
        "site_id": "MLB",
        "permalink": format!("https://produto.mercadolivre.com.br/{id}"),
        "condition": "new",
        "sold_quantity": 120,
        "shipping": { "free_shipping": true },
        "health": 0.9,
        "date_created": "2024-01-10T09:30:00.000Z"
    })
}

// ---------------------------------------------------------------------------
// get_* layer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_item_returns_parsed_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json("MLB123")))
        .expect(1)
        .mount(&server)
        .await;

    let item = test_client(&server.uri())
        .get_item("MLB123")
        .await
        .expect("should parse item");

    assert_eq!(item.id, "MLB123");
    assert_eq!(item.category_id.as_deref(), Some("MLB31447"));
    assert_eq!(item.seller_id, Some(998_877));
    assert_eq!(item.sold_quantity, Some(120));
    assert!(item.shipping.free_shipping);
}

#[tokio::test]
async fn get_item_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).get_item("MLB404").await;
    assert!(
        matches!(result, Err(CatalogError::NotFound { ref url }) if url.ends_with("/items/MLB404")),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn get_item_maps_5xx_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB500"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).get_item("MLB500").await;
    assert!(
        matches!(result, Err(CatalogError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn get_item_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).get_item("MLB1").await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn get_top_selling_sends_category_sort_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/MLB/search"))
        .and(query_param("category", "MLB31447"))
        .and(query_param("sort", "sold_quantity_desc"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "site_id": "MLB",
            "results": [
                { "id": "MLB1", "title": "Primeiro", "sold_quantity": 500 },
                { "id": "MLB2", "title": "Segundo", "sold_quantity": 400 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stubs = test_client(&server.uri())
        .get_top_selling("MLB", "MLB31447")
        .await
        .expect("should parse search");

    let ids: Vec<&str> = stubs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["MLB1", "MLB2"]);
}

// ---------------------------------------------------------------------------
// fetch_* layer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_item_absorbs_failure_into_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(test_client(&server.uri()).fetch_item("MLB1").await.is_none());
}

#[tokio::test]
async fn fetch_description_falls_back_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB1/description"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let description = test_client(&server.uri()).fetch_description("MLB1").await;
    assert_eq!(description.text(), NO_PUBLIC_DESCRIPTION);
}

#[tokio::test]
async fn fetch_description_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/MLB1/description"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "plain_text": "100% algodão" })),
        )
        .mount(&server)
        .await;

    let description = test_client(&server.uri()).fetch_description("MLB1").await;
    assert_eq!(description.text(), "100% algodão");
}

#[tokio::test]
async fn fetch_reference_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/MLB31447"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "MLB31447",
            "name": "Camisetas",
            "path_from_root": [
                { "id": "MLB1430", "name": "Roupas" },
                { "id": "MLB31447", "name": "Camisetas" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/currencies/BRL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "BRL", "description": "Real", "symbol": "R$", "decimal_places": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/998877"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 998_877, "nickname": "LOJA_TOP", "permalink": "http://perfil.mercadolivre.com.br/LOJA_TOP"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sites/MLB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "MLB", "name": "Brasil", "default_currency_id": "BRL"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let category = client.fetch_category("MLB31447").await.expect("category");
    assert_eq!(category.breadcrumb(), "Roupas > Camisetas");

    let currency = client.fetch_currency("BRL").await.expect("currency");
    assert_eq!(currency.symbol.as_deref(), Some("R$"));

    let seller = client.fetch_seller(998_877).await.expect("seller");
    assert_eq!(seller.nickname.as_deref(), Some("LOJA_TOP"));

    let site = client.fetch_site("MLB").await.expect("site");
    assert_eq!(site.default_currency_id.as_deref(), Some("BRL"));
}

#[tokio::test]
async fn fetch_reference_records_absorb_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.fetch_category("MLB1").await.is_none());
    assert!(client.fetch_currency("BRL").await.is_none());
    assert!(client.fetch_seller(1).await.is_none());
    assert!(client.fetch_site("MLB").await.is_none());
}

#[tokio::test]
async fn fetch_top_selling_returns_empty_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/MLB/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let stubs = test_client(&server.uri())
        .fetch_top_selling("MLB", "MLB31447")
        .await;
    assert!(stubs.is_empty());
}

#[tokio::test]
async fn fetch_item_absorbs_connection_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    assert!(test_client(&uri).fetch_item("MLB1").await.is_none());
}
