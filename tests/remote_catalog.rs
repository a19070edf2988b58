//! Integration tests for the remote catalog against a mocked gateway.

use comics_client_sdk::{CatalogConfig, HeroCatalog as _, Kind, RemoteCatalog};
use httpmock::prelude::*;
use secrecy::SecretString;
use serde_json::json;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

fn remote(server: &MockServer) -> RemoteCatalog {
    init_tracing();
    let config = CatalogConfig::from_raw(
        &server.base_url(),
        "pub-key",
        SecretString::from("priv-key"),
    )
    .expect("mock server URL is valid");
    RemoteCatalog::new(config)
}

#[tokio::test]
async fn fetch_all_maps_records_and_signs_the_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/characters")
                .query_param("apikey", "pub-key")
                .query_param_exists("ts")
                .query_param_exists("hash");
            then.status(200).json_body(json!({
                "data": {
                    "results": [
                        {
                            "id": 1,
                            "name": "Spider-Man",
                            "description": "Wall-crawler.",
                            "image": { "path": "http://img.example.com/spidey", "extension": "jpg" }
                        },
                        {
                            "id": 2,
                            "name": "Iron Man",
                            "description": "Armored Avenger.",
                            "image": { "path": "https://img.example.com/ironman", "extension": "png" }
                        }
                    ]
                }
            }));
        })
        .await;

    let heroes = remote(&server).fetch_all().await.expect("mocked success");
    mock.assert_async().await;

    assert_eq!(heroes.len(), 2, "two records on the wire");
    assert_eq!(heroes[0].name, "Spider-Man");
    assert_eq!(
        heroes[0].image_url, "https://img.example.com/spidey.jpg",
        "http path must be upgraded"
    );
    assert_eq!(
        heroes[1].image_url, "https://img.example.com/ironman.png",
        "https path passes through"
    );
}

#[tokio::test]
async fn fetch_all_with_zero_results_is_empty_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters");
            then.status(200).json_body(json!({ "data": { "results": [] } }));
        })
        .await;

    let heroes = remote(&server).fetch_all().await.expect("empty is fine");
    assert!(heroes.is_empty(), "zero results must map to an empty Vec");
}

#[tokio::test]
async fn fetch_by_id_scopes_the_path_and_returns_one_hero() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/characters/1011334")
                .query_param("apikey", "pub-key")
                .query_param_exists("ts")
                .query_param_exists("hash");
            then.status(200).json_body(json!({
                "data": {
                    "results": [{
                        "id": 1011334,
                        "name": "3-D Man",
                        "description": "",
                        "image": { "path": "https://img.example.com/3dman", "extension": "jpg" }
                    }]
                }
            }));
        })
        .await;

    let hero = remote(&server)
        .fetch_by_id(1_011_334)
        .await
        .expect("one matching record");
    mock.assert_async().await;

    assert_eq!(hero.id, 1_011_334);
    assert_eq!(hero.name, "3-D Man");
}

#[tokio::test]
async fn fetch_by_id_with_no_results_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters/7");
            then.status(200).json_body(json!({ "data": { "results": [] } }));
        })
        .await;

    let err = remote(&server).fetch_by_id(7).await.unwrap_err();
    assert_eq!(err.kind(), Kind::NotFound);
}

#[tokio::test]
async fn fetch_by_id_with_multiple_results_takes_the_first() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters/2");
            then.status(200).json_body(json!({
                "data": {
                    "results": [
                        {
                            "id": 2,
                            "name": "Iron Man",
                            "description": "",
                            "image": { "path": "https://img.example.com/a", "extension": "jpg" }
                        },
                        {
                            "id": 2,
                            "name": "Iron Man (duplicate)",
                            "description": "",
                            "image": { "path": "https://img.example.com/b", "extension": "jpg" }
                        }
                    ]
                }
            }));
        })
        .await;

    let hero = remote(&server).fetch_by_id(2).await.expect("first wins");
    assert_eq!(hero.name, "Iron Man");
}

#[tokio::test]
async fn non_success_status_surfaces_as_status_kind() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters");
            then.status(401)
                .json_body(json!({ "code": "InvalidCredentials" }));
        })
        .await;

    let err = remote(&server).fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), Kind::Status);
    assert_eq!(
        err.status_code().map(|s| s.as_u16()),
        Some(401),
        "status code should be preserved"
    );
}

#[tokio::test]
async fn malformed_body_surfaces_as_parse_kind() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters");
            then.status(200).body("not json at all");
        })
        .await;

    let err = remote(&server).fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), Kind::Parse);
}

#[tokio::test]
async fn unexpected_shape_surfaces_as_parse_kind() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/characters");
            // Valid JSON, but missing the `data.results` envelope.
            then.status(200).json_body(json!({ "results": [] }));
        })
        .await;

    let err = remote(&server).fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), Kind::Parse);
}

#[tokio::test]
async fn connection_failure_surfaces_as_network_kind() {
    // Nothing listens on this port; the connection is refused outright.
    let config = CatalogConfig::from_raw(
        "http://127.0.0.1:1/",
        "pub-key",
        SecretString::from("priv-key"),
    )
    .expect("valid URL");

    let err = RemoteCatalog::new(config).fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), Kind::Network);
}
