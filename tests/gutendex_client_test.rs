use bibliocatalog::domain::DomainError;
use bibliocatalog::gutendex::{BookSource, GutendexClient, decode};
use bibliocatalog::services::SearchQuery;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GutendexClient {
    GutendexClient::new(&format!("{}/books/", server.uri()), Duration::from_secs(5))
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_title_search_sends_encoded_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/"))
        .and(query_param("search", "pride and prejudice"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"count":1,"results":[{"id":1342,"title":"Pride and Prejudice","authors":[{"name":"Austen, Jane","birth_year":1775,"death_year":1817}],"languages":["en"],"download_count":60000}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = SearchQuery::by_title("  pride and prejudice ").unwrap();
    let body = client.search(&query).await.expect("search failed");

    let records = decode(&body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title.as_deref(), Some("Pride and Prejudice"));
    assert_eq!(records[0].authors[0].birth_year, Some(1775));
}

#[tokio::test]
async fn test_popular_search_uses_sort_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/"))
        .and(query_param("sort", "popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.search(&SearchQuery::most_popular()).await.unwrap();

    assert!(decode(&body).unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_external_service() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .search(&SearchQuery::by_topic("children").unwrap())
        .await
        .unwrap_err();

    match err {
        DomainError::ExternalService(msg) => {
            assert!(msg.contains("500"), "unexpected message: {}", msg);
            assert!(msg.contains("upstream exploded"));
        }
        other => panic!("expected ExternalService, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_maps_to_external_service() {
    // Nothing listens on the discard port
    let client = GutendexClient::new("http://127.0.0.1:9/books/", Duration::from_secs(2)).unwrap();

    let err = client
        .search(&SearchQuery::most_popular())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ExternalService(_)));
}
