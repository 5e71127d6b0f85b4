/// The collections this tool manages. Their document schemas are owned by
/// the queuectl application itself, not by this crate.
pub const JOBS_COLLECTION: &str = "jobs";
pub const CONFIGS_COLLECTION: &str = "configs";

/// Reset order: jobs first, then configs.
pub fn managed_collections() -> [&'static str; 2] {
    [JOBS_COLLECTION, CONFIGS_COLLECTION]
}

#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub collection: String,
    pub deleted: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ResetReport {
    pub collections: Vec<CollectionReport>,
    pub dry_run: bool,
}

impl ResetReport {
    pub fn total_deleted(&self) -> u64 {
        self.collections.iter().map(|c| c.deleted).sum()
    }
}
