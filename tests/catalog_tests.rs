// Catalog fetch tests against a local mock of the Homebrew JSON API

use brewify::api::{BrewApi, Catalog};
use brewify::config::Config;
use brewify::error::BrewifyError;
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> BrewApi {
    let config = Config::new(
        PathBuf::from("brew"),
        PathBuf::from("fzf"),
        &format!("{}/api", server.uri()),
        false,
        true,
        false,
    );
    BrewApi::new(&config).unwrap()
}

#[tokio::test]
async fn test_formula_names_in_feed_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/formula.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "wget", "desc": "Internet file retriever"},
            {"name": "a2ps", "versions": {"stable": "4.15.6"}},
            {"name": "htop"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(api.formulas().await, vec!["wget", "a2ps", "htop"]);
}

#[tokio::test]
async fn test_cask_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cask.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"token": "firefox", "name": ["Mozilla Firefox"]},
            {"token": "iterm2", "name": ["iTerm2"]}
        ])))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(api.casks().await, vec!["firefox", "iterm2"]);
}

#[tokio::test]
async fn test_non_200_yields_empty() {
    let server = MockServer::start().await;
    for status in [404, 500, 503] {
        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert!(api.formulas().await.is_empty(), "status {status}");
        assert!(api.casks().await.is_empty(), "status {status}");
    }
}

#[tokio::test]
async fn test_non_200_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = api_for(&server);
    match api.try_fetch_formulas().await {
        Err(BrewifyError::HttpStatus { status, url }) => {
            assert_eq!(status, 502);
            assert!(url.ends_with("/api/formula.json"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert!(matches!(
        api.try_fetch_casks().await,
        Err(BrewifyError::JsonError(_))
    ));
    assert!(api.casks().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_yields_empty() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    drop(server);

    assert!(api.formulas().await.is_empty());
}

#[tokio::test]
async fn test_fetched_fresh_each_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/formula.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "wget"}])))
        .expect(2)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.formulas().await;
    api.formulas().await;
}
