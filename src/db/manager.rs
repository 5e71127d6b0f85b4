use crate::config::db_config::DbConfig;
use crate::domain::ports::DocumentStore;
use crate::utils::error::{DbError, Result};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::{Acknowledgment, ClientOptions, WriteConcern};
use mongodb::{Client, Database};
use tokio::time::timeout;

/// Manages the single client handle against the configured deployment.
pub struct ConnectionManager {
    config: DbConfig,
    client: Option<Client>,
}

impl ConnectionManager {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Opens a connection and verifies it with a `ping`.
    ///
    /// The driver establishes connections lazily; the ping forces server
    /// selection so resolution and reachability failures surface here
    /// instead of on the first real operation.
    pub async fn connect(&mut self) -> Result<()> {
        if self.client.is_some() {
            tracing::debug!("connect() called on an open connection; reconnecting");
            self.disconnect().await;
        }

        let mut options = ClientOptions::parse(&self.config.uri).await?;
        options.server_selection_timeout = Some(self.config.server_selection_timeout());
        options.connect_timeout = Some(self.config.connect_timeout());
        options.app_name = Some(self.config.app_name.clone());

        if self.config.is_srv() {
            options.retry_writes = Some(true);
            options.write_concern =
                Some(WriteConcern::builder().w(Acknowledgment::Majority).build());
        }

        let client = Client::with_options(options)?;
        client
            .database(&self.config.database_name())
            .run_command(doc! { "ping": 1 })
            .await?;

        tracing::info!("✅ MongoDB connected successfully.");
        self.client = Some(client);
        Ok(())
    }

    /// Shuts the client down. Safe to call when already disconnected.
    pub async fn disconnect(&mut self) {
        match self.client.take() {
            Some(client) => {
                client.shutdown().await;
                tracing::info!("MongoDB disconnected.");
            }
            None => {
                tracing::debug!("disconnect() called without an open connection");
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn database(&self) -> Result<Database> {
        let client = self.client.as_ref().ok_or(DbError::NotConnected)?;
        Ok(client.database(&self.config.database_name()))
    }
}

// The driver has no per-operation socket timeout option, so the configured
// bound is applied around each operation instead.
#[async_trait]
impl DocumentStore for ConnectionManager {
    async fn count_documents(&self, collection: &str) -> Result<u64> {
        let coll = self.database()?.collection::<Document>(collection);
        let bound = self.config.socket_timeout();
        match timeout(bound, coll.count_documents(doc! {})).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(DbError::OperationTimeout(bound)),
        }
    }

    async fn clear_collection(&self, collection: &str) -> Result<u64> {
        let coll = self.database()?.collection::<Document>(collection);
        let bound = self.config.socket_timeout();
        match timeout(bound, coll.delete_many(doc! {})).await {
            Ok(result) => Ok(result?.deleted_count),
            Err(_) => Err(DbError::OperationTimeout(bound)),
        }
    }

    async fn disconnect(&mut self) {
        ConnectionManager::disconnect(self).await;
    }
}
