//! Integration tests for woocommerce-rs.
//!
//! These run entirely offline: network-facing cases go through a local
//! wiremock server (plain HTTP, so they exercise the OAuth signing
//! branch), and the HTTPS auth branches are covered by request-building
//! assertions in the unit tests.
//!
//! Run with: cargo test --test client_tests

use std::sync::Once;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woocommerce_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a client pointed at a mock server (plain HTTP, OAuth branch).
fn create_client(server: &MockServer) -> WooCommerceClient {
    init_logging();
    WooCommerceClient::new(server.uri(), "ck_test_key", "cs_test_secret")
        .expect("Failed to create client")
}

fn sample_product(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Premium Quality",
        "type": "simple",
        "status": "publish",
        "price": "21.99",
        "regular_price": "21.99",
        "sale_price": "",
        "stock_status": "instock"
    })
}

// ============================================================================
// CONSTRUCTION TESTS
// ============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_missing_consumer_secret_fails_synchronously() {
        // No network call is ever attempted; this fails at construction.
        let result = WooCommerceClient::new("http://shop.test", "ck_key", "");
        match result {
            Err(Error::Config(message)) => assert!(message.contains("consumer_secret")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_url_fails_synchronously() {
        assert!(matches!(
            WooCommerceClient::new("", "ck_key", "cs_secret"),
            Err(Error::Config(_))
        ));
    }
}

// ============================================================================
// OAUTH DISPATCH TESTS (plain HTTP)
// ============================================================================

mod oauth_dispatch_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_products_is_oauth_signed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/products"))
            .and(query_param("per_page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_product(794)])))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = ListProductsQuery {
            per_page: Some(5),
            ..Default::default()
        };

        let products = client.products().list(Some(query)).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 794);
        assert_eq!(products[0].price, "21.99");

        // The outgoing request must carry the full OAuth parameter set.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let query: std::collections::HashMap<String, String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(query["per_page"], "5");
        assert_eq!(query["oauth_consumer_key"], "ck_test_key");
        assert_eq!(query["oauth_signature_method"], "HMAC-SHA256");
        assert_eq!(query["oauth_version"], "1.0");
        assert!(query.contains_key("oauth_nonce"));
        assert!(query.contains_key("oauth_timestamp"));
        assert!(query.contains_key("oauth_signature"));
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_signatures_are_unique_per_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = create_client(&server);
        client.get("orders", None).await.unwrap();
        client.get("orders", None).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        let signature = |i: usize| {
            requests[i]
                .url
                .query_pairs()
                .find(|(k, _)| k == "oauth_signature")
                .map(|(_, v)| v.into_owned())
                .unwrap()
        };
        let nonce = |i: usize| {
            requests[i]
                .url
                .query_pairs()
                .find(|(k, _)| k == "oauth_nonce")
                .map(|(_, v)| v.into_owned())
                .unwrap()
        };

        assert_ne!(nonce(0), nonce(1));
        assert_ne!(signature(0), signature(1));
    }

    #[tokio::test]
    async fn test_raw_get_attaches_timing_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let response = client.get("orders", None).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.is_array());
        assert!(response.duration > std::time::Duration::ZERO);
        assert!(response.started_at <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_pagination_headers_exposed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/products"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .insert_header("X-WP-Total", "42")
                    .insert_header("X-WP-TotalPages", "5"),
            )
            .mount(&server)
            .await;

        let client = create_client(&server);
        let response = client.get("products", None).await.unwrap();

        assert_eq!(response.total_items(), Some(42));
        assert_eq!(response.total_pages(), Some(5));
    }

    #[tokio::test]
    async fn test_options_verb() {
        let server = MockServer::start().await;
        Mock::given(method("OPTIONS"))
            .and(path("/wp-json/wc/v3/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let response = client.options("products", None).await.unwrap();
        assert_eq!(response.status, 200);
    }
}

// ============================================================================
// BODY SERIALIZATION TESTS
// ============================================================================

mod body_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_product_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wc/v3/products"))
            .respond_with(ResponseTemplate::new(201).set_body_json(sample_product(795)))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let payload = json!({
            "name": "Premium Quality",
            "type": "simple",
            "regular_price": "21.99"
        });

        let created = client.products().create(&payload).await.unwrap();
        assert_eq!(created.id, 795);

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json;charset=utf-8"
        );
        assert_eq!(request.headers.get("accept").unwrap(), "application/json");

        let sent: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(sent, payload);
    }

    #[tokio::test]
    async fn test_update_order() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/wp-json/wc/v3/orders/727"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 727,
                "status": "completed",
                "total": "29.35"
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let order = client
            .orders()
            .update(727, &json!({ "status": "completed" }))
            .await
            .unwrap();
        assert_eq!(order.status, "completed");
    }

    #[tokio::test]
    async fn test_delete_carries_force_param() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/wp-json/wc/v3/customers/25"))
            .and(query_param("force", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 25,
                "email": "john.doe@example.com"
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let deleted = client.customers().delete(25, true).await.unwrap();
        assert_eq!(deleted.id, 25);
    }
}

// ============================================================================
// ERROR HANDLING TESTS
// ============================================================================

mod error_handling_tests {
    use super::*;

    #[tokio::test]
    async fn test_non_2xx_surfaces_as_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/products/999999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "woocommerce_rest_product_invalid_id",
                "message": "Invalid ID.",
                "data": { "status": 404 }
            })))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.products().retrieve(999999).await.unwrap_err();

        match err {
            Error::Api {
                status,
                code,
                message,
                duration,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("woocommerce_rest_product_invalid_id"));
                assert_eq!(message, "Invalid ID.");
                assert!(duration > std::time::Duration::ZERO);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/orders"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": "internal_server_error",
                "message": "Internal server error"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.orders().list(None).await.unwrap_err();
        assert!(err.is_server_error());

        // A failed call fails once; the mock's expect(1) verifies no retry
        // happened when the server drops out of scope.
    }

    #[tokio::test]
    async fn test_connection_failure_surfaces_as_transport_error() {
        init_logging();
        // Nothing listens on this port.
        let client = WooCommerceClient::new("http://127.0.0.1:9", "ck_key", "cs_secret").unwrap();

        let err = client.get("products", None).await.unwrap_err();
        match err {
            Error::Transport { .. } => {}
            other => panic!("Expected Transport error, got {:?}", other),
        }
        assert!(err.duration().is_some());
    }
}

// ============================================================================
// CONCURRENT REQUESTS TESTS
// ============================================================================

mod concurrent_tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_requests_share_no_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v3/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let products_api = client.products();
        let orders_api = client.orders();
        let customers_api = client.customers();
        let (products, orders, customers) = tokio::join!(
            products_api.list(None),
            orders_api.list(None),
            customers_api.list(None),
        );

        assert!(products.is_ok());
        assert!(orders.is_ok());
        assert!(customers.is_ok());

        // Every request carries its own fresh signature.
        let requests = server.received_requests().await.unwrap();
        let mut nonces: Vec<String> = requests
            .iter()
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "oauth_nonce")
                    .map(|(_, v)| v.into_owned())
            })
            .collect();
        nonces.sort();
        nonces.dedup();
        assert_eq!(nonces.len(), 3);
    }
}
