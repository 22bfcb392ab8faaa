use chromia_core::Config;
use chromia_infra::DeletionScheduler;
use chromia_processing::DominantColorAnalyzer;
use chromia_storage::Storage;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub deletions: DeletionScheduler,
    pub analyzer: DominantColorAnalyzer,
}
