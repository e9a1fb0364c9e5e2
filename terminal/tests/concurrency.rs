//! Overlapping calls on one store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use studio_terminal::core::{ApiError, ArticleApi, Transport};
use studio_terminal::services::api::{ApiRequest, ApiStore};
use studio_terminal::services::token_store::MemoryTokenStore;
use tokio::sync::oneshot;

type Reply = Result<Value, ApiError>;

/// Each request waits for the reply registered under its path.
#[derive(Default)]
struct GatedTransport {
    pending: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
}

impl GatedTransport {
    fn gate(&self, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(path.to_string(), rx);
        tx
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn execute(&self, request: ApiRequest) -> Reply {
        let rx = self
            .pending
            .lock()
            .remove(&request.path())
            .expect("no gate registered for path");
        rx.await.unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".into())))
    }
}

async fn wait_for_in_flight(store: &ApiStore, n: usize) {
    while store.in_flight() < n {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_busy_until_last_call_finishes() {
    let transport = Arc::new(GatedTransport::default());
    let first_gate = transport.gate("/articles/first/analyze");
    let second_gate = transport.gate("/articles/second/analyze");
    let store = Arc::new(ApiStore::new(
        transport.clone(),
        Arc::new(MemoryTokenStore::new()),
    ));

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.analyze_article("first").await }
    });
    wait_for_in_flight(&store, 1).await;

    let second = tokio::spawn({
        let store = store.clone();
        async move { store.analyze_article("second").await }
    });
    wait_for_in_flight(&store, 2).await;

    first_gate
        .send(Err(ApiError::Transport("timeout of 30000ms exceeded".into())))
        .unwrap();
    let first_result = first.await.unwrap();

    assert_eq!(
        first_result.unwrap_err().message(),
        "timeout of 30000ms exceeded"
    );
    assert!(store.is_busy(), "second call is still pending");
    assert_eq!(store.in_flight(), 1);
    assert_eq!(
        store.last_error().as_deref(),
        Some("timeout of 30000ms exceeded")
    );

    second_gate
        .send(Ok(json!({"status": "success", "data": {"score": 61}})))
        .unwrap();
    let second_result = second.await.unwrap().unwrap();

    // Each caller got its own result.
    assert_eq!(second_result["data"]["score"], 61);
    assert!(!store.is_busy());
    assert_eq!(
        store.last_error().as_deref(),
        Some("timeout of 30000ms exceeded")
    );
}

#[tokio::test]
async fn test_cancelled_call_releases_busy() {
    let transport = Arc::new(GatedTransport::default());
    let _gate = transport.gate("/stats/dashboard");
    let store = Arc::new(ApiStore::new(transport, Arc::new(MemoryTokenStore::new())));

    let call = tokio::spawn({
        let store = store.clone();
        async move { store.get_dashboard_stats().await }
    });
    wait_for_in_flight(&store, 1).await;

    call.abort();
    assert!(call.await.unwrap_err().is_cancelled());

    assert!(!store.is_busy());
    assert_eq!(store.last_error(), None);
}
