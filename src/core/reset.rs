use crate::core::{CollectionReport, DocumentStore, ResetReport};
use crate::utils::error::Result;
use crate::utils::validation;

/// Clears the managed collections through a [`DocumentStore`], then closes
/// the store regardless of how the clearing went.
pub struct ResetEngine<S: DocumentStore> {
    store: S,
    dry_run: bool,
}

impl<S: DocumentStore> ResetEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    pub fn with_dry_run(store: S, dry_run: bool) -> Self {
        Self { store, dry_run }
    }

    /// Runs the reset and disconnects. Disconnect happens even when a
    /// delete fails; the first error is what the caller sees.
    pub async fn run(&mut self, collections: &[&str]) -> Result<ResetReport> {
        let result = self.clear_all(collections).await;
        self.store.disconnect().await;
        result
    }

    async fn clear_all(&self, collections: &[&str]) -> Result<ResetReport> {
        let mut report = ResetReport {
            collections: Vec::new(),
            dry_run: self.dry_run,
        };

        for name in collections {
            validation::validate_collection_name("collection", name)?;

            let deleted = if self.dry_run {
                let count = self.store.count_documents(name).await?;
                println!("Would clear {} documents from '{}'", count, name);
                count
            } else {
                let deleted = self.store.clear_collection(name).await?;
                println!("Cleared {} documents from '{}'", deleted, name);
                deleted
            };

            report.collections.push(CollectionReport {
                collection: name.to_string(),
                deleted,
            });
        }

        if self.dry_run {
            println!(
                "Dry run complete. {} documents would be deleted.",
                report.total_deleted()
            );
        } else {
            println!("Database cleared successfully.");
        }

        Ok(report)
    }
}
