// tests/backend_client_tests.rs
// Scraper client against an in-process mock scraper

mod common;

use std::time::Duration;

use common::{dead_endpoint, item, MockScraper};
use luxury_link::web_app::api::{BackendClient, BackendConfig, BackendError};
use luxury_link::web_app::model::*;
use serde_json::json;

#[actix_web::test]
async fn test_search_returns_products_and_url() -> anyhow::Result<()> {
    let mock = MockScraper::json(
        200,
        json!({
            "data": [
                item("Chanel Matelasse", "¥350,000", "uedasakae", "https://img.example.com/1.jpg"),
                item("Hermes Birkin 30", "¥2,100,000", "jjcollection", NO_IMAGE_SENTINEL),
            ],
            "search_url": "https://www.fromjapan.co.jp/japan/en/rakuten/search/chanel/",
        }),
    )
    .await?;

    let request = SearchRequest::new(SearchMode::Product, "chanel").expect("non-blank term");
    let results = mock.client().search(&request).await?;

    assert_eq!(results.products.len(), 2);
    assert_eq!(results.products[0].name, "Chanel Matelasse");
    assert_eq!(results.products[0].image_src(), Some("https://img.example.com/1.jpg"));
    assert_eq!(results.products[1].seller, "jjcollection");
    assert_eq!(results.products[1].image_src(), None);
    assert_eq!(
        results.search_url.as_deref(),
        Some("https://www.fromjapan.co.jp/japan/en/rakuten/search/chanel/")
    );
    assert_eq!(mock.hits(), 1);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_search_without_data_is_empty_success() -> anyhow::Result<()> {
    let mock = MockScraper::json(200, json!({ "search_url": "" })).await?;

    let request = SearchRequest::new(SearchMode::SellerName, "brandoff").expect("non-blank term");
    let results = mock.client().search(&request).await?;

    assert!(results.products.is_empty());
    assert_eq!(results.search_url, None);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_request_body_has_single_mode_key() -> anyhow::Result<()> {
    let mock = MockScraper::json(200, json!({ "data": [] })).await?;
    let client = mock.client();

    let cases = [
        (SearchMode::Product, "search", "  Louis Vuitton "),
        (SearchMode::Seller, "seller", "uedasakae"),
        (SearchMode::SellerName, "sellerSearch", "Brand Off"),
    ];

    for (mode, key, term) in cases {
        let request = SearchRequest::new(mode, term).expect("non-blank term");
        client.search(&request).await?;

        let requests = mock.requests();
        let sent = requests.last().expect("mock saw the request");
        assert_eq!(sent.content_type.as_deref(), Some("application/json"));

        let body = sent.json();
        let object = body.as_object().expect("body is a JSON object");
        assert_eq!(object.len(), 1, "exactly one key for {:?}", mode);
        // Sent as typed, surrounding whitespace included
        assert_eq!(object[key], json!(term));
    }

    assert_eq!(mock.hits(), 3);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_error_status_is_rejection_with_message() -> anyhow::Result<()> {
    let mock = MockScraper::json(404, json!({ "error": "No products found for this seller." })).await?;

    let request = SearchRequest::new(SearchMode::Seller, "nobody").expect("non-blank term");
    let error = mock.client().search(&request).await.expect_err("404 must fail");

    match &error {
        BackendError::Rejected { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message.as_deref(), Some("No products found for this seller."));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert_eq!(error.into_failure().message(), "No products found for this seller.");

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_error_status_without_message_uses_fallback() -> anyhow::Result<()> {
    let mock = MockScraper::json(500, json!({})).await?;

    let request = SearchRequest::new(SearchMode::Product, "bag").expect("non-blank term");
    let error = mock.client().search(&request).await.expect_err("500 must fail");

    let failure = error.into_failure();
    assert_eq!(failure, SearchFailure::Rejected { message: None });
    assert_eq!(failure.message(), REJECTED_FALLBACK_MESSAGE);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_unreadable_body_is_unreachable() -> anyhow::Result<()> {
    let mock = MockScraper::raw(200, "text/html", "<html>Internal Server Error</html>").await?;

    let request = SearchRequest::new(SearchMode::Product, "bag").expect("non-blank term");
    let error = mock.client().search(&request).await.expect_err("HTML is not a search response");

    assert!(matches!(error, BackendError::InvalidResponse(_)));
    assert_eq!(error.into_failure(), SearchFailure::Unreachable);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_dead_backend_is_unreachable() -> anyhow::Result<()> {
    let config = BackendConfig::default()
        .with_endpoint(dead_endpoint())
        .with_timeout(Duration::from_secs(5));
    let client = BackendClient::new(config)?;

    let request = SearchRequest::new(SearchMode::Product, "bag").expect("non-blank term");
    let error = client.search(&request).await.expect_err("nothing is listening");

    assert!(matches!(error, BackendError::Unreachable(_)));
    assert_eq!(error.into_failure().message(), UNREACHABLE_MESSAGE);

    Ok(())
}
