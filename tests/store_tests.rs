use async_trait::async_trait;
use portal_client::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn start_session_populates_all_keys() {
    let store = SessionStore::in_memory();
    store
        .start_session(SessionCredentials::new(
            "a1".to_string(),
            "r1".to_string(),
            "u1".to_string(),
            "alice".to_string(),
        ))
        .await;

    assert_eq!(store.access_token().await.as_deref(), Some("a1"));
    assert_eq!(store.refresh_token().await.as_deref(), Some("r1"));
    assert_eq!(store.user_id().await.as_deref(), Some("u1"));
    assert_eq!(store.username().await.as_deref(), Some("alice"));
    assert!(!store.is_empty().await);
}

#[tokio::test]
async fn start_session_removes_absent_fields() {
    let store = SessionStore::in_memory();
    store
        .start_session(SessionCredentials::new(
            "a1".to_string(),
            "r1".to_string(),
            "u1".to_string(),
            "alice".to_string(),
        ))
        .await;

    // A partial login result must not leave stale values behind
    store
        .start_session(SessionCredentials {
            access_token: Some("a2".to_string()),
            refresh_token: Some("r2".to_string()),
            user_id: None,
            username: None,
        })
        .await;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.access_token.as_deref(), Some("a2"));
    assert_eq!(snapshot.refresh_token.as_deref(), Some("r2"));
    assert!(snapshot.user_id.is_none());
    assert!(snapshot.username.is_none());
}

#[tokio::test]
async fn set_access_token_replaces_previous_value() {
    let store = SessionStore::in_memory();
    store.set_access_token("a1".to_string()).await;
    store.set_access_token("a2".to_string()).await;

    assert_eq!(store.access_token().await.as_deref(), Some("a2"));
}

#[tokio::test]
async fn clear_empties_the_store() {
    let store = SessionStore::in_memory();
    store
        .start_session(SessionCredentials::new(
            "a1".to_string(),
            "r1".to_string(),
            "u1".to_string(),
            "alice".to_string(),
        ))
        .await;

    store.clear().await;

    assert!(store.is_empty().await);
    assert_eq!(store.snapshot().await, SessionCredentials::default());
}

#[tokio::test]
async fn clones_share_the_same_backend() {
    let store = SessionStore::in_memory();
    let other = store.clone();

    store.set_access_token("a1".to_string()).await;
    assert_eq!(other.access_token().await.as_deref(), Some("a1"));

    other.clear().await;
    assert!(store.is_empty().await);
}

#[test]
fn memory_store_supports_raw_key_operations() {
    let backend = MemoryStore::new();

    tokio_test::block_on(async {
        backend.put("access_token", "a1".to_string()).await;
        assert_eq!(backend.get("access_token").await.as_deref(), Some("a1"));

        backend.remove("access_token").await;
        assert!(backend.get("access_token").await.is_none());
    });
}

#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    clears: AtomicUsize,
}

#[async_trait]
impl CredentialStore for CountingStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String) {
        self.inner.put(key, value).await
    }

    async fn remove(&self, key: &str) {
        self.inner.remove(key).await
    }

    async fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear().await
    }
}

#[tokio::test]
async fn custom_backend_receives_session_operations() {
    let backend = Arc::new(CountingStore::default());
    let store = SessionStore::new(backend.clone());

    store.set_access_token("a1".to_string()).await;
    assert_eq!(store.access_token().await.as_deref(), Some("a1"));

    store.clear().await;
    assert!(store.is_empty().await);
    assert_eq!(backend.clears.load(Ordering::SeqCst), 1);
}
