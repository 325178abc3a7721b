//! HTTP API tests.
//!
//! Each test loads a catalog from a temporary markdown file, serves the
//! router on an ephemeral port, and talks to it with `reqwest`.

use serde_json::Value;
use slang_lexicon::catalog::Catalog;
use slang_lexicon::config::BrowseConfig;
use slang_lexicon::server::router;
use slang_lexicon::validate::{validate_page, validate_record, validate_search_response};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const TERMS: &str = "## lit
Definition: Exciting or excellent
Formal Translation: Amazing
Usage Examples:
- That party was lit!
Cultural Context:
- Age Group: teens
- Social Setting: casual
- Region Specificity: city-wide

## salty
Definition: Bitter or upset, like a lit fuse
Usage Examples:
- Don't be salty
Cultural Context:
- Age Group: young adults
- Social Setting: casual
- Region Specificity: city-wide

## flex
Definition: To show off
Usage Examples:
- Weird flex, but okay.
Cultural Context:
- Age Group: teens
- Social Setting: casual
- Region Specificity: widespread

## vibe
Definition: A feeling or atmosphere
Usage Examples:
- Good vibes only.
Cultural Context:
- Age Group: all ages
- Social Setting: casual
- Region Specificity: widespread

## based
Definition: Confidently yourself
Usage Examples:
- That take is based.
Cultural Context:
- Age Group: young adults
- Social Setting: online
- Region Specificity: internet culture
";

struct TestServer {
    base: String,
    client: reqwest::Client,
    _tmp: TempDir,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl TestServer {
    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .unwrap()
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.get(path).await;
        let status = resp.status().as_u16();
        let body: Value = resp.json().await.unwrap();
        (status, body)
    }
}

async fn start_server(terms: &str) -> TestServer {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("terms.md");
    fs::write(&path, terms).unwrap();

    let catalog = Arc::new(Catalog::load(&path));
    let browse = BrowseConfig {
        default_limit: 10,
        max_limit: 50,
    };
    let app = router(catalog, browse);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{}", addr),
        client: reqwest::Client::new(),
        _tmp: tmp,
        handle,
    }
}

fn terms_of(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["term"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["terms"], 5);
    assert!(body["loadedAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_search_exact_match_first() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/search?q=lit").await;
    assert_eq!(status, 200);
    assert_eq!(body["query"], "lit");
    assert_eq!(body["totalResults"], 2);
    assert_eq!(terms_of(&body["results"]), vec!["lit", "salty"]);
    assert!(body["executionTime"].as_f64().unwrap() >= 0.0);

    let report = validate_search_response(&body);
    assert!(report.is_valid, "errors: {:?}", report.errors);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let server = start_server(TERMS).await;
    let (_, lower) = server.get_json("/api/search?q=flex").await;
    let (_, upper) = server.get_json("/api/search?q=FLEX").await;
    assert_eq!(terms_of(&lower["results"]), terms_of(&upper["results"]));
    assert_eq!(lower["totalResults"], 1);
}

#[tokio::test]
async fn test_search_no_results() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/search?q=zzzz").await;
    assert_eq!(status, 200);
    assert_eq!(body["totalResults"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_blank_query_rejected() {
    let server = start_server(TERMS).await;
    for path in ["/api/search", "/api/search?q=", "/api/search?q=%20%20%20"] {
        let (status, body) = server.get_json(path).await;
        assert_eq!(status, 400, "path {}", path);
        assert_eq!(body["error"]["code"], "bad_request");
    }
}

#[tokio::test]
async fn test_browse_default_page() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/browse").await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["totalItems"], 5);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(
        terms_of(&body["items"]),
        vec!["based", "flex", "lit", "salty", "vibe"]
    );

    let report = validate_page(&body);
    assert!(report.is_valid, "errors: {:?}", report.errors);
}

#[tokio::test]
async fn test_browse_custom_page() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/browse?page=1&limit=2").await;
    assert_eq!(status, 200);
    assert_eq!(terms_of(&body["items"]), vec!["based", "flex"]);
    assert_eq!(body["totalPages"], 3);

    let (_, body) = server.get_json("/api/browse?page=500&limit=2").await;
    assert_eq!(body["page"], 3);
    assert_eq!(terms_of(&body["items"]), vec!["vibe"]);
}

#[tokio::test]
async fn test_browse_invalid_params_rejected() {
    let server = start_server(TERMS).await;
    for query in [
        "page=abc",
        "page=0",
        "page=-1",
        "page=.5",
        "limit=xyz",
        "limit=0",
        "limit=-5",
        "limit=51",
    ] {
        let (status, body) = server.get_json(&format!("/api/browse?{}", query)).await;
        assert_eq!(status, 400, "query {}", query);
        assert_eq!(body["error"]["code"], "bad_request");
    }
}

#[tokio::test]
async fn test_browse_floors_trailing_text() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/browse?page=1.5&limit=2").await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert_eq!(terms_of(&body["items"]), vec!["based", "flex"]);

    let (status, body) = server.get_json("/api/browse?page=2abc&limit=2xyz").await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(terms_of(&body["items"]), vec!["lit", "salty"]);
}

#[tokio::test]
async fn test_term_detail() {
    let server = start_server(TERMS).await;
    let (status, body) = server.get_json("/api/term/term-1").await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], "term-1");
    assert_eq!(body["term"], "lit");
    assert_eq!(body["formalTranslation"], "Amazing");
    assert_eq!(body["usageExamples"][0]["example"], "That party was lit!");
    assert_eq!(body["culturalContext"]["ageGroup"], "teens");
    assert!(validate_record(&body).is_valid);
}

#[tokio::test]
async fn test_term_not_found() {
    let server = start_server(TERMS).await;
    for path in ["/api/term/term-999", "/api/term/term-1%20OR%201=1"] {
        let (status, body) = server.get_json(path).await;
        assert_eq!(status, 404, "path {}", path);
        assert_eq!(body["error"]["code"], "not_found");
    }
}

#[tokio::test]
async fn test_cors_header_present() {
    let server = start_server(TERMS).await;
    let resp = server
        .client
        .get(format!("{}/api/health", server.base))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn test_unreadable_source_serves_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    let catalog = Arc::new(Catalog::load(&tmp.path().join("missing.md")));
    assert_eq!(catalog.errors().len(), 1);

    let app = router(catalog, BrowseConfig::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let body: Value = reqwest::get(format!("http://{}/api/browse", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["totalItems"], 0);
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["page"], 1);

    handle.abort();
}
