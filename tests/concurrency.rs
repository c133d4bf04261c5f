//! Many clients hitting the shared, read-only route sources at once.

use std::sync::Arc;
use std::time::Duration;

use urlshort::routing::{RouteLookup, RouteMap};
use urlshort::store::RouteStore;

mod common;

async fn hammer(routes: Arc<dyn RouteLookup>) {
    let (addr, shutdown) = common::start_server(routes).await;

    let concurrency = 16;
    let requests_per_task = 25;
    let client = common::client();

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..requests_per_task {
                let (path, expected): (&str, u16) = if (task + i) % 2 == 0 {
                    ("/hit", 302)
                } else {
                    ("/miss", 404)
                };
                let res = client
                    .get(format!("http://{}{}", addr, path))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(res.status(), expected, "{path}");
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    shutdown.trigger();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_map_lookups() {
    let routes: RouteMap = [("/hit", "https://target")].into_iter().collect();
    hammer(Arc::new(routes)).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_store_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let store = RouteStore::open(dir.path().join("routes.db"), Duration::from_secs(2)).unwrap();
    store.seed(&[("/hit", "https://target")].into_iter().collect()).unwrap();

    hammer(Arc::new(store)).await;
}
