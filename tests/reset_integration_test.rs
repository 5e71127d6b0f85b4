use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use queuectl_db::domain::model::{managed_collections, CONFIGS_COLLECTION, JOBS_COLLECTION};
use queuectl_db::utils::error::{DbError, Result};
use queuectl_db::{DocumentStore, ResetEngine};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_test::assert_ok;

#[derive(Clone)]
struct InMemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    disconnected: Arc<AtomicBool>,
    fail_on: Option<String>,
}

impl InMemoryStore {
    fn new() -> Self {
        Self {
            collections: Arc::new(Mutex::new(HashMap::new())),
            disconnected: Arc::new(AtomicBool::new(false)),
            fail_on: None,
        }
    }

    fn failing_on(collection: &str) -> Self {
        Self {
            fail_on: Some(collection.to_string()),
            ..Self::new()
        }
    }

    async fn insert_documents(&self, collection: &str, count: usize) {
        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_string()).or_default();
        for seq in 0..count {
            docs.push(doc! { "seq": seq as i64 });
        }
    }

    async fn len(&self, collection: &str) -> usize {
        let collections = self.collections.lock().await;
        collections.get(collection).map_or(0, |docs| docs.len())
    }

    fn was_disconnected(&self) -> bool {
        self.disconnected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn count_documents(&self, collection: &str) -> Result<u64> {
        if self.fail_on.as_deref() == Some(collection) {
            return Err(DbError::OperationTimeout(Duration::from_millis(10)));
        }
        Ok(self.len(collection).await as u64)
    }

    async fn clear_collection(&self, collection: &str) -> Result<u64> {
        if self.fail_on.as_deref() == Some(collection) {
            return Err(DbError::OperationTimeout(Duration::from_millis(10)));
        }
        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let deleted = docs.len() as u64;
        docs.clear();
        Ok(deleted)
    }

    async fn disconnect(&mut self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_reset_clears_both_collections_and_reports_counts() {
    let store = InMemoryStore::new();
    store.insert_documents(JOBS_COLLECTION, 3).await;
    store.insert_documents(CONFIGS_COLLECTION, 2).await;

    let mut engine = ResetEngine::new(store.clone());
    let report = assert_ok!(engine.run(&managed_collections()).await);

    assert_eq!(report.collections.len(), 2);
    assert_eq!(report.collections[0].collection, JOBS_COLLECTION);
    assert_eq!(report.collections[0].deleted, 3);
    assert_eq!(report.collections[1].collection, CONFIGS_COLLECTION);
    assert_eq!(report.collections[1].deleted, 2);
    assert_eq!(report.total_deleted(), 5);

    // Both collections are empty afterwards and the store was closed.
    assert_eq!(store.len(JOBS_COLLECTION).await, 0);
    assert_eq!(store.len(CONFIGS_COLLECTION).await, 0);
    assert!(store.was_disconnected());
}

#[tokio::test]
async fn test_reset_on_empty_collections_reports_zero() {
    let store = InMemoryStore::new();

    let mut engine = ResetEngine::new(store.clone());
    let report = engine.run(&managed_collections()).await.unwrap();

    assert_eq!(report.total_deleted(), 0);
    assert!(store.was_disconnected());
}

#[tokio::test]
async fn test_dry_run_reports_counts_without_deleting() {
    let store = InMemoryStore::new();
    store.insert_documents(JOBS_COLLECTION, 4).await;
    store.insert_documents(CONFIGS_COLLECTION, 1).await;

    let mut engine = ResetEngine::with_dry_run(store.clone(), true);
    let report = engine.run(&managed_collections()).await.unwrap();

    assert!(report.dry_run);
    assert_eq!(report.total_deleted(), 5);

    // Nothing was actually removed.
    assert_eq!(store.len(JOBS_COLLECTION).await, 4);
    assert_eq!(store.len(CONFIGS_COLLECTION).await, 1);
    assert!(store.was_disconnected());
}

#[tokio::test]
async fn test_disconnect_is_attempted_when_a_delete_fails() {
    let store = InMemoryStore::failing_on(CONFIGS_COLLECTION);
    store.insert_documents(JOBS_COLLECTION, 2).await;
    store.insert_documents(CONFIGS_COLLECTION, 2).await;

    let mut engine = ResetEngine::new(store.clone());
    let result = engine.run(&managed_collections()).await;

    assert!(result.is_err());
    // jobs was cleared before the failure; configs was left alone.
    assert_eq!(store.len(JOBS_COLLECTION).await, 0);
    assert_eq!(store.len(CONFIGS_COLLECTION).await, 2);
    assert!(store.was_disconnected());
}

#[tokio::test]
async fn test_failure_on_first_collection_stops_the_run() {
    let store = InMemoryStore::failing_on(JOBS_COLLECTION);
    store.insert_documents(JOBS_COLLECTION, 1).await;
    store.insert_documents(CONFIGS_COLLECTION, 3).await;

    let mut engine = ResetEngine::new(store.clone());
    let result = engine.run(&managed_collections()).await;

    assert!(result.is_err());
    assert_eq!(store.len(JOBS_COLLECTION).await, 1);
    assert_eq!(store.len(CONFIGS_COLLECTION).await, 3);
    assert!(store.was_disconnected());
}

#[tokio::test]
async fn test_invalid_collection_name_is_rejected_before_any_delete() {
    let store = InMemoryStore::new();
    store.insert_documents(JOBS_COLLECTION, 2).await;

    let mut engine = ResetEngine::new(store.clone());
    let result = engine.run(&["jobs$bad"]).await;

    assert!(result.is_err());
    assert_eq!(store.len(JOBS_COLLECTION).await, 2);
    assert!(store.was_disconnected());
}
