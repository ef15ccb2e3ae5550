//! Registry tests against a local mock Solr endpoint.

use mockito::{Matcher, Server};
use mvnreps_core::{MavenCentralRegistry, Registry, SearchConfig, SearchError};

const SELECT_PATH: &str = "/solrsearch/select";

fn registry_for(server: &Server) -> MavenCentralRegistry {
    MavenCentralRegistry::with_base_url(format!("{}{SELECT_PATH}", server.url())).unwrap()
}

#[tokio::test]
async fn test_fuzzy_search_sends_expected_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", SELECT_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "okhttp".into()),
            Matcher::UrlEncoded("rows".into(), "5".into()),
            Matcher::UrlEncoded("wt".into(), "json".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response": {"numFound": 1, "docs": [
                {"g": "com.squareup.okhttp3", "a": "okhttp", "latestVersion": "4.12.0"}
            ]}}"#,
        )
        .create_async()
        .await;

    let config = SearchConfig::parse("okhttp", None).unwrap();
    let docs = registry_for(&server).search(&config).await.unwrap();

    mock.assert_async().await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].artifact_id, "okhttp");
    assert_eq!(docs[0].display_version(false), "4.12.0");
}

#[tokio::test]
async fn test_precise_search_uses_gav_core() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", SELECT_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), r#"g:"com.google.guava" AND a:"guava""#.into()),
            Matcher::UrlEncoded("rows".into(), "3".into()),
            Matcher::UrlEncoded("wt".into(), "json".into()),
            Matcher::UrlEncoded("core".into(), "gav".into()),
            Matcher::UrlEncoded("sort".into(), "timestamp desc".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"response": {"docs": [
                {"g": "com.google.guava", "a": "guava", "v": "33.2.1-jre"},
                {"g": "com.google.guava", "a": "guava", "v": "33.2.0-jre"},
                {"g": "com.google.guava", "a": "guava", "v": "33.1.0-jre"}
            ]}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let config = SearchConfig::parse("com.google.guava:guava,3", Some("gradle")).unwrap();
    let docs = registry_for(&server).search(&config).await.unwrap();

    mock.assert_async().await;
    let versions: Vec<_> = docs.iter().map(|d| d.version.as_str()).collect();
    assert_eq!(versions, ["33.2.1-jre", "33.2.0-jre", "33.1.0-jre"]);
}

#[tokio::test]
async fn test_non_200_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", SELECT_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let config = SearchConfig::parse("okhttp", None).unwrap();
    let err = registry_for(&server).search(&config).await.unwrap_err();

    assert!(matches!(err, SearchError::HttpStatus { status: 503 }));
}

#[tokio::test]
async fn test_malformed_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", SELECT_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"response\": ")
        .create_async()
        .await;

    let config = SearchConfig::parse("okhttp", None).unwrap();
    let err = registry_for(&server).search(&config).await.unwrap_err();

    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn test_empty_docs() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", SELECT_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"response": {"numFound": 0, "docs": []}}"#)
        .create_async()
        .await;

    let config = SearchConfig::parse("zzzz-no-such-artifact", None).unwrap();
    let docs = registry_for(&server).search(&config).await.unwrap();

    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_connection_refused() {
    let registry = MavenCentralRegistry::with_base_url("http://127.0.0.1:1/solrsearch/select")
        .unwrap();
    let config = SearchConfig::parse("okhttp", None).unwrap();
    let err = registry.search(&config).await.unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)));
    assert!(err.to_string().starts_with("Request failed"));
}
