use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between the reset engine and the MongoDB driver. Tests supply an
/// in-memory implementation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn count_documents(&self, collection: &str) -> Result<u64>;

    /// Deletes every document in the collection, returning the deleted count.
    async fn clear_collection(&self, collection: &str) -> Result<u64>;

    /// Closes the underlying connection. Never fails; callers rely on being
    /// able to invoke this unconditionally, including when already closed.
    async fn disconnect(&mut self);
}
