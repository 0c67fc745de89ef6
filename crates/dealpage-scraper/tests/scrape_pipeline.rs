//! Integration tests for the fetch-then-extract pipeline.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path plus every fetch failure
//! that must suppress extraction entirely.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dealpage_core::FieldValue;
use dealpage_scraper::{scrape, Engine, FetchError, PageClient};

/// Builds a `PageClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> PageClient {
    PageClient::new(5, "dealpage-test/0.1").expect("failed to build test PageClient")
}

const PRODUCT_PAGE: &str = concat!(
    "<html><body>",
    r#"<span id="productTitle"> Acme 32-inch TV </span>"#,
    r#"<span id="priceblock_ourprice">₹14,990.00</span>"#,
    r#"<span id="acrCustomerReviewText">1,208 ratings</span>"#,
    "</body></html>",
);

#[tokio::test]
async fn scrape_returns_record_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/product", server.uri());
    let record = scrape(&test_client(), &Engine::new(), &url)
        .await
        .expect("expected a record on a successful fetch");

    assert_eq!(
        record.product_name,
        FieldValue::Text("Acme 32-inch TV".to_string())
    );
    assert_eq!(record.selling_price, FieldValue::Text("14990".to_string()));
    assert_eq!(
        record.number_of_ratings,
        FieldValue::Text("1,208 ratings".to_string())
    );
    assert_eq!(record.fields().len(), 11);
}

#[tokio::test]
async fn scrape_returns_none_on_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(503).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/product", server.uri());
    let result = scrape(&test_client(), &Engine::new(), &url).await;
    assert!(result.is_none(), "non-2xx must yield no record, got: {result:?}");
}

#[tokio::test]
async fn scrape_returns_none_on_bot_challenge_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>Type the characters in this CAPTCHA</body></html>"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/product", server.uri());
    let result = scrape(&test_client(), &Engine::new(), &url).await;
    assert!(result.is_none(), "bot challenge must yield no record");
}

#[tokio::test]
async fn fetch_page_surfaces_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/product", server.uri());
    let err = test_client().fetch_page(&url).await.unwrap_err();
    assert!(
        matches!(err, FetchError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_page_surfaces_bot_challenge_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_string("please solve the captcha"))
        .mount(&server)
        .await;

    let url = format!("{}/product", server.uri());
    let err = test_client().fetch_page(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::BotChallenge { .. }));
}

#[tokio::test]
async fn scrape_returns_none_on_connection_failure() {
    // Nothing is listening on this port.
    let result = scrape(
        &test_client(),
        &Engine::new(),
        "http://127.0.0.1:9/product",
    )
    .await;
    assert!(result.is_none());
}
