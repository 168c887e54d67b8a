//! Jackett client tests
//!
//! Health check, search ordering and validation, and magnet resolution
//! against a mock Jackett server.

use jizz::api::jackett::{JackettClient, JackettError, MagnetError};
use jizz::models::{SearchResult, MAX_RESULTS};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const RESULTS_PATH: &str = "/api/v2.0/indexers/all/results";

fn client_for(server: &ServerGuard) -> JackettClient {
    let endpoint = format!("{}{}?apikey=testkey&Query", server.url(), RESULTS_PATH);
    JackettClient::new(endpoint).unwrap()
}

fn search_query(term: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("apikey".into(), "testkey".into()),
        Matcher::UrlEncoded("Query".into(), term.into()),
        Matcher::Regex(r"_=\d+".into()),
    ])
}

fn results_body(seeders: &[u64]) -> String {
    let results: Vec<_> = seeders
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "Title": format!("Result {}", i),
                "Seeders": s,
                "Size": 1024 * (i as u64 + 1),
                "Link": format!("http://jackett.local/dl/{}", i),
            })
        })
        .collect();
    json!({ "Results": results }).to_string()
}

// =============================================================================
// Health Check Tests
// =============================================================================

#[tokio::test]
async fn test_check_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", RESULTS_PATH)
        .match_query(Matcher::UrlEncoded("apikey".into(), "testkey".into()))
        .with_status(200)
        .with_body(r#"{"Results": []}"#)
        .create_async()
        .await;

    client_for(&server).check().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_bad_api_key() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", RESULTS_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let err = client_for(&server).check().await.unwrap_err();
    assert!(matches!(err, JackettError::Status(401)));
    assert_eq!(err.to_string(), "Received 401 from Jackett");
}

// =============================================================================
// Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_sorts_and_caps() {
    let mut server = Server::new_async().await;
    let seeders = [5, 100, 3, 42, 7, 0, 18, 99, 9, 1, 66, 12, 4, 30, 2];
    let mock = server
        .mock("GET", RESULTS_PATH)
        .match_query(search_query("blade runner"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(results_body(&seeders))
        .create_async()
        .await;

    let results = client_for(&server).search("blade runner").await.unwrap();
    mock.assert_async().await;

    assert_eq!(results.len(), MAX_RESULTS);
    let first = results.get(0).unwrap();
    assert_eq!(first.title, "Result 1");
    assert_eq!(first.seeders, 100);

    let ordered: Vec<u64> = results.iter().map(|r| r.seeders).collect();
    assert_eq!(ordered, vec![100, 99, 66, 42, 30, 18, 12, 9, 7, 5]);
}

#[tokio::test]
async fn test_search_maps_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", RESULTS_PATH)
        .match_query(search_query("bunny"))
        .with_status(200)
        .with_body(
            r#"{"Results": [{
                "Title": "Big.Buck.Bunny.1080p",
                "Seeders": 12,
                "Size": 4509715661,
                "Link": "http://jackett.local/dl/bbb",
                "Tracker": "ignored"
            }]}"#,
        )
        .create_async()
        .await;

    let results = client_for(&server).search("bunny").await.unwrap();
    assert_eq!(
        results.get(0),
        Some(&SearchResult {
            title: "Big.Buck.Bunny.1080p".to_string(),
            seeders: 12,
            size_bytes: 4_509_715_661,
            link: "http://jackett.local/dl/bbb".to_string(),
        })
    );
    assert_eq!(results.get(0).unwrap().format_size(), "4.20 GB");
}

#[tokio::test]
async fn test_search_empty_results() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", RESULTS_PATH)
        .match_query(search_query("nothing"))
        .with_status(200)
        .with_body(r#"{"Results": []}"#)
        .create_async()
        .await;

    let results = client_for(&server).search("nothing").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_missing_results_field() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", RESULTS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error": "indexer offline"}"#)
        .create_async()
        .await;

    let err = client_for(&server).search("x").await.unwrap_err();
    assert!(matches!(err, JackettError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_search_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", RESULTS_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).search("x").await.unwrap_err();
    assert!(matches!(err, JackettError::Status(500)));
}

// =============================================================================
// Magnet Resolution Tests
// =============================================================================

fn result_with_link(link: String) -> SearchResult {
    SearchResult {
        title: "Some.Release".to_string(),
        seeders: 1,
        size_bytes: 1,
        link,
    }
}

#[tokio::test]
async fn test_resolve_magnet_from_redirect() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/dl/7")
        .match_query(Matcher::Any)
        .with_status(302)
        .with_header("location", "magnet:?xt=urn:btih:deadbeef&dn=Some.Release")
        .create_async()
        .await;

    let link = format!("{}/dl/7?jackett_apikey=testkey", server.url());
    let magnet = client_for(&server)
        .resolve_magnet(&result_with_link(link))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        magnet.as_str(),
        "magnet:?xt=urn:btih:deadbeef&dn=Some.Release"
    );
}

#[tokio::test]
async fn test_resolve_magnet_rejects_torrent_url() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/dl/7")
        .match_query(Matcher::Any)
        .with_status(302)
        .with_header("location", "http://example.com/file.torrent")
        .create_async()
        .await;

    let link = format!("{}/dl/7", server.url());
    let err = client_for(&server)
        .resolve_magnet(&result_with_link(link))
        .await
        .unwrap_err();

    assert!(matches!(err, MagnetError::NotMagnet(_)));
}

#[tokio::test]
async fn test_resolve_magnet_without_redirect() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/dl/7")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("d8:announce...")
        .create_async()
        .await;

    let link = format!("{}/dl/7", server.url());
    let err = client_for(&server)
        .resolve_magnet(&result_with_link(link))
        .await
        .unwrap_err();

    assert!(matches!(err, MagnetError::MissingLocation(200)));
}

#[tokio::test]
async fn test_resolve_magnet_uri_skips_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let magnet = client_for(&server)
        .resolve_magnet(&result_with_link("magnet:?xt=urn:btih:cafe".to_string()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(magnet.as_str(), "magnet:?xt=urn:btih:cafe");
}
