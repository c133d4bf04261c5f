//! End-to-end redirect behaviour over a real socket.

use std::sync::Arc;
use std::time::Duration;

use urlshort::config::RouteSource;
use urlshort::lifecycle::build_routes;
use urlshort::routing::{parse_json, parse_yaml, RouteMap};

mod common;

#[tokio::test]
async fn test_map_redirects_and_greets() {
    let routes: RouteMap = [("/x", "https://y")].into_iter().collect();
    let (addr, shutdown) = common::start_server(Arc::new(routes)).await;
    let client = common::client();

    let res = client.get(format!("http://{}/x", addr)).send().await.expect("server unreachable");
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://y");
    assert!(res.headers().contains_key("x-request-id"));

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap().trim_end(), "Hello, world!");

    let res = client.get(format!("http://{}/unknown", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_yaml_last_duplicate_wins() {
    let yaml = b"- path: /urlshort\n  url: https://a\n- path: /urlshort\n  url: https://b\n";
    let (addr, shutdown) = common::start_server(Arc::new(parse_yaml(yaml).unwrap())).await;

    let res = common::client()
        .get(format!("http://{}/urlshort", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://b");

    shutdown.trigger();
}

#[tokio::test]
async fn test_empty_json_always_falls_back() {
    let (addr, shutdown) = common::start_server(Arc::new(parse_json(b"[]").unwrap())).await;
    let client = common::client();

    let res = client.get(format!("http://{}/anything", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert!(!res.headers().contains_key("location"));

    let res = client.post(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_store_backed_routes() {
    let dir = tempfile::tempdir().unwrap();
    let source = RouteSource::StorePath {
        path: dir.path().join("routes.db"),
        busy_timeout: Duration::from_secs(2),
        seed: [("/a", "https://b")].into_iter().collect(),
    };
    let (addr, shutdown) = common::start_server(build_routes(&source).unwrap()).await;
    let client = common::client();

    let res = client.get(format!("http://{}/a", addr)).send().await.unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://b");

    let res = client.get(format!("http://{}/missing", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let (addr, shutdown) = common::start_server(Arc::new(RouteMap::new())).await;

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let result = common::client()
        .get(format!("http://{}/", addr))
        .timeout(Duration::from_secs(2))
        .send()
        .await;
    assert!(result.is_err(), "server should be gone after shutdown");
}
