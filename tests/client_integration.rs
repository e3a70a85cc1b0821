//! Integration tests for the EasyBroker client against a mock HTTP server.

use easybroker_client::easybroker::{EasyBrokerClient, ListingApi, ListingRequest, StatusOption};
use easybroker_client::query::SearchOptions;
use easybroker_client::ClientError;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(page: u32, next_page: Value, count: usize, offset: usize) -> Value {
    let content: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "public_id": format!("EB-{:04}", offset + i),
                "title": format!("Property {}", offset + i),
                "property_type": "Casa",
                "location": { "name": "Zapopan, Jalisco" }
            })
        })
        .collect();

    json!({
        "pagination": { "limit": 50, "page": page, "total": 107, "next_page": next_page },
        "content": content
    })
}

#[test]
fn test_empty_api_key_is_configuration_error() {
    let err = EasyBrokerClient::new("").err().unwrap();
    assert!(matches!(err, ClientError::MissingApiKey));
    assert_eq!(err.to_string(), "No API key provided");
}

#[tokio::test]
async fn test_get_all_properties_three_pages() {
    let mock_server = MockServer::start().await;

    for (page, next_page, count, offset) in
        [(1, json!(2), 50, 0), (2, json!(3), 50, 50), (3, Value::Null, 7, 100)]
    {
        Mock::given(method("GET"))
            .and(path("/properties"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", "50"))
            .and(header("X-Authorization", "secret"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(page, next_page, count, offset)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = EasyBrokerClient::with_base_url("secret", mock_server.uri()).unwrap();
    let properties = client.get_all_properties().await.unwrap();

    assert_eq!(properties.len(), 107);
    for (i, property) in properties.iter().enumerate() {
        assert_eq!(property.public_id, format!("EB-{:04}", i));
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_limit_over_50_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = ListingRequest::new(1, 51);
    assert!(matches!(result, Err(ClientError::LimitExceeded { limit: 51 })));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_unrecognized_filter_keys_leave_url_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, Value::Null, 1, 0)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = EasyBrokerClient::with_base_url("secret", mock_server.uri()).unwrap();
    let options: SearchOptions =
        serde_json::from_value(json!({"bedrooms": 3, "city": "Zapopan"})).unwrap();

    let plain = ListingRequest::new(1, 20).unwrap();
    let filtered = plain.clone().with_options(options);

    client.get_property_list(&plain).await.unwrap();
    client.get_property_list(&filtered).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[1].url.query(), Some("page=1&limit=20"));
}

#[tokio::test]
async fn test_status_filter_sent_once_per_member() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, Value::Null, 0, 0)))
        .mount(&mock_server)
        .await;

    let client = EasyBrokerClient::with_base_url("secret", mock_server.uri()).unwrap();
    let request = ListingRequest::default()
        .with_options(SearchOptions::new().statuses([StatusOption::Published, StatusOption::Sold]));

    client.get_property_list(&request).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let statuses: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(key, _)| key == "search[statuses][]")
        .map(|(_, value)| value.into_owned())
        .collect();

    assert_eq!(statuses.len(), 2);
    let parsed: BTreeSet<StatusOption> = statuses.iter().map(|s| s.parse().unwrap()).collect();
    assert_eq!(parsed, BTreeSet::from([StatusOption::Sold, StatusOption::Published]));
}

#[tokio::test]
async fn test_get_property_by_id_404_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/EB-NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&mock_server)
        .await;

    let client = EasyBrokerClient::with_base_url("secret", mock_server.uri()).unwrap();
    let result = client.get_property_by_id("EB-NOPE").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_property_by_id_500_passes_payload_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/properties/EB-0001"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let client = EasyBrokerClient::with_base_url("secret", mock_server.uri()).unwrap();
    let err = client.get_property_by_id("EB-0001").await.unwrap_err();

    match err {
        ClientError::Remote { status, payload } => {
            assert_eq!(status, 500);
            assert_eq!(payload, json!({"error": "boom"}));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let uri = "http://127.0.0.1:1";

    let client = EasyBrokerClient::with_base_url("secret", uri).unwrap();
    let err = client.get_property_by_id("EB-0001").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
