use reqwest::StatusCode;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::GitHubClient;
use crate::consts;
use crate::error::FetchError;
use crate::models::GitHubAuth;

fn client_for(server: &MockServer) -> GitHubClient {
  let auth = GitHubAuth {
    token: "test_token".to_string(),
  };
  GitHubClient::new(auth).with_base_url(server.uri())
}

#[tokio::test]
async fn test_get_repository_size() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/proj"))
    .and(header("Accept", "application/vnd.github.v3+json"))
    .and(header("User-Agent", consts::USER_AGENT))
    .and(header("Authorization", "token test_token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": 42,
        "full_name": "alice/proj",
        "size": 1000,
        "clone_url": "https://github.com/alice/proj.git"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = client.get_repository_size("alice", "proj").await?;
  assert_eq!(repo.size_kb, 1000);
  assert_eq!(repo.clone_url, "https://github.com/alice/proj.git");

  Ok(())
}

#[tokio::test]
async fn test_get_repository_size_without_size_field() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/empty"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "clone_url": "https://github.com/alice/empty.git"
    })))
    .mount(&mock_server)
    .await;

  let repo = client.get_repository_size("alice", "empty").await?;
  assert_eq!(repo.size_kb, 0);

  Ok(())
}

#[tokio::test]
async fn test_get_repository_size_missing_clone_url() {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/proj"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "size": 12 })))
    .mount(&mock_server)
    .await;

  let error = client.get_repository_size("alice", "proj").await.unwrap_err();
  assert!(matches!(error, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_get_repository_size_not_found() {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/missing"))
    .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let error = client.get_repository_size("alice", "missing").await.unwrap_err();
  assert!(matches!(error, FetchError::NotFound));
  assert_eq!(error.to_string(), "Repository not found.");
}

#[tokio::test]
async fn test_get_repository_size_unauthorized() {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/proj"))
    .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
        "message": "Bad credentials",
        "documentation_url": "https://docs.github.com/rest"
    })))
    .mount(&mock_server)
    .await;

  let error = client.get_repository_size("alice", "proj").await.unwrap_err();
  assert!(matches!(error, FetchError::Unauthorized));
  assert_eq!(error.to_string(), "Invalid or expired token.");
}

#[tokio::test]
async fn test_get_repository_size_other_status() {
  let mock_server = MockServer::start().await;
  let client = client_for(&mock_server);

  Mock::given(method("GET"))
    .and(path("/repos/alice/proj"))
    .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
        "message": "API rate limit exceeded"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let error = client.get_repository_size("alice", "proj").await.unwrap_err();
  match &error {
    FetchError::Http { status, message } => {
      assert_eq!(*status, StatusCode::FORBIDDEN);
      assert_eq!(message, "API rate limit exceeded");
    }
    other => panic!("expected HTTP error, got {other:?}"),
  }
  assert!(error.to_string().starts_with("HTTP Error: 403"));
}

#[tokio::test]
async fn test_get_repository_size_connection_refused() {
  // Reserve a free port, then close it so nothing is listening there.
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let uri = format!("http://{}", listener.local_addr().unwrap());
  drop(listener);

  let auth = GitHubAuth {
    token: "test_token".to_string(),
  };
  let client = GitHubClient::new(auth).with_base_url(uri);

  let error = client.get_repository_size("alice", "proj").await.unwrap_err();
  assert!(matches!(error, FetchError::Transport(_)));
  assert!(error.to_string().starts_with("Error fetching repository details"));
}
