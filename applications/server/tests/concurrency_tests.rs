/// Concurrent request tests
/// Many in-flight requests share one store through the router
mod common;

use axum::http::StatusCode;
use common::{create_test_app, get, post_json};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_contiguous_ids() {
    const REQUESTS: i64 = 100;

    let (app, store) = create_test_app();

    let handles: Vec<_> = (0..REQUESTS)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let payload = json!({ "name": format!("user-{}", i) }).to_string();
                post_json(&app, "/users", &payload).await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=REQUESTS).collect::<Vec<_>>());
    assert_eq!(store.len().await, REQUESTS as usize);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_lists_during_creates_are_consistent() {
    let (app, _store) = create_test_app();

    let writers: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let payload = json!({ "name": format!("user-{}", i) }).to_string();
                post_json(&app, "/users", &payload).await.0
            })
        })
        .collect();

    let readers: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, body) = get(&app, "/users").await;
                assert_eq!(status, StatusCode::OK);

                let users = body.as_array().unwrap().clone();
                let ids: HashSet<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
                assert_eq!(ids.len(), users.len());
                assert!(users.iter().all(|u| u["name"].as_str().is_some()));
                assert!(users.iter().all(|u| u["created_at"].as_str().is_some()));
            })
        })
        .collect();

    for writer in writers {
        assert_eq!(writer.await.unwrap(), StatusCode::CREATED);
    }
    for reader in readers {
        reader.await.unwrap();
    }

    let (_, body) = get(&app, "/users").await;
    assert_eq!(body.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_stores_are_isolated_per_app() {
    let (first, _) = create_test_app();
    let (second, _) = create_test_app();

    post_json(&first, "/users", r#"{"name":"Ann"}"#).await;

    let (_, body) = post_json(&second, "/users", r#"{"name":"Bob"}"#).await;
    assert_eq!(body["id"], 1);

    let (status, _) = get(&second, "/users?id=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
