use mockito::{Matcher, Server};
use serde_json::json;

use searchbox::types::FeedbackEvent;
use searchbox::{ClientConfig, SearchApi, SearchClient, SearchError};

fn client_for(server: &Server) -> SearchClient {
  SearchClient::with_config(ClientConfig::new(server.url(), 5)).unwrap()
}

#[tokio::test]
async fn test_autocomplete_encodes_query() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("GET", "/api/search/autocomplete")
    .match_query(Matcher::UrlEncoded("q".into(), "cat food & more".into()))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"suggestions": ["cat food", "cat food bowls"], "search_id": 17}"#)
    .create_async()
    .await;

  let response = client_for(&server).autocomplete("cat food & more").await.unwrap();

  mock.assert_async().await;
  assert_eq!(response.suggestions, vec!["cat food", "cat food bowls"]);
  assert_eq!(response.search_id, Some(17));
}

#[tokio::test]
async fn test_autocomplete_server_error() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/search/autocomplete")
    .match_query(Matcher::Any)
    .with_status(500)
    .with_body(r#"{"error": "db down"}"#)
    .create_async()
    .await;

  let result = client_for(&server).autocomplete("cats").await;

  match result {
    Err(SearchError::Status { status, body, .. }) => {
      assert_eq!(status, 500);
      assert!(body.contains("db down"));
    }
    other => panic!("Expected Status error, got: {other:?}"),
  }
}

#[tokio::test]
async fn test_search_posts_query() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("POST", "/api/search")
    .match_body(Matcher::Json(json!({ "query": "rust" })))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      r#"[
        {"id": 1, "title": "Rust", "description": "A language"},
        {"id": "b2", "title": "Rust Belt", "description": "A region"}
      ]"#,
    )
    .create_async()
    .await;

  let results = client_for(&server).search("rust").await.unwrap();

  mock.assert_async().await;
  assert_eq!(results.len(), 2);
  assert_eq!(results[0].id, "1");
  assert_eq!(results[1].title, "Rust Belt");
}

#[tokio::test]
async fn test_search_invalid_json() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("POST", "/api/search")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body("not json")
    .create_async()
    .await;

  let result = client_for(&server).search("rust").await;

  assert!(matches!(result, Err(SearchError::Decode { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_feedback_posts_event_and_ignores_body() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("POST", "/api/search/feedback")
    .match_body(Matcher::Json(json!({ "result_id": "42", "is_positive": true })))
    .with_status(200)
    .with_body("")
    .create_async()
    .await;

  let result = client_for(&server).feedback(&FeedbackEvent::new("42", true)).await;

  mock.assert_async().await;
  assert!(result.is_ok());
}

#[tokio::test]
async fn test_feedback_rejected() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("POST", "/api/search/feedback")
    .with_status(400)
    .with_body(r#"{"error": "Missing required fields"}"#)
    .create_async()
    .await;

  let result = client_for(&server).feedback(&FeedbackEvent::new("42", false)).await;

  assert!(matches!(result, Err(SearchError::Status { status: 400, .. })));
}

#[tokio::test]
async fn test_popular_with_limit() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("GET", "/api/search/popular")
    .match_query(Matcher::UrlEncoded("limit".into(), "3".into()))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"popular_searches": [{"query": "rust", "count": 9}, {"query": "go", "count": 2}]}"#)
    .create_async()
    .await;

  let popular = client_for(&server).popular(3).await.unwrap();

  mock.assert_async().await;
  assert_eq!(popular.len(), 2);
  assert_eq!(popular[0].query, "rust");
  assert_eq!(popular[0].count, 9);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
  let client = SearchClient::with_config(ClientConfig::new("http://127.0.0.1:1", 5)).unwrap();

  let result = client.search("anything").await;

  assert!(matches!(result, Err(SearchError::Transport { .. })), "got: {result:?}");
}
