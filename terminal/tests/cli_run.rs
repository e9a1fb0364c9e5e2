//! End-to-end runs of the `studio` command line against a stub server.

use clap::Parser;
use mockito::{Matcher, Server};
use studio_terminal::app::{run, Cli};
use studio_terminal::AppError;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("studio").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn test_token_file_feeds_requests() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("credentials.json");
    let token_file = token_file.to_str().unwrap();

    let mut server = Server::new_async().await;
    let api_url = format!("{}/api", server.url());
    let mock = server
        .mock("GET", "/api/articles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("offset".into(), "2".into()),
        ]))
        .match_header("authorization", "Bearer saved-token")
        .with_status(200)
        .with_body(
            r#"{"status":"success","data":[{"id":"a3","title":"第三篇","author":"x","read_count":15000}],"total":3}"#,
        )
        .create_async()
        .await;

    let saved = run(cli(&["--token-file", token_file, "token", "set", "saved-token"]))
        .await
        .unwrap();
    assert_eq!(saved, "Token saved");

    let output = run(cli(&[
        "--api-url", &api_url,
        "--token-file", token_file,
        "articles", "--page", "2", "--limit", "2", "--table",
    ]))
    .await
    .unwrap();

    mock.assert_async().await;
    assert!(output.contains("第三篇"));
    assert!(output.ends_with("Showing 1 of 3"));
}

#[tokio::test]
async fn test_api_failure_surfaces_message() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("credentials.json");

    let mut server = Server::new_async().await;
    let api_url = format!("{}/api", server.url());
    server
        .mock("GET", "/api/stats/dashboard")
        .with_status(503)
        .create_async()
        .await;

    let err = run(cli(&[
        "--api-url", &api_url,
        "--token-file", token_file.to_str().unwrap(),
        "stats",
    ]))
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.to_string(), "Request failed with status code 503");
}

#[tokio::test]
async fn test_bad_api_url_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("credentials.json");

    let err = run(cli(&[
        "--api-url", "not a url",
        "--token-file", token_file.to_str().unwrap(),
        "health",
    ]))
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
}
