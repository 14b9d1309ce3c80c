use crate::{
    abstract_trait::storage::DynFileStorage,
    di::{DependenciesInject, Repositories},
    storage::LocalFileStorage,
};
use prometheus_client::registry::Registry;
use shared::{
    config::{ConnectionPool, MediaConfig},
    utils::{SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub media: MediaConfig,
}

impl AppState {
    /// Wires the Postgres repositories and starts the process metrics
    /// collector.
    pub fn new(pool: ConnectionPool, media: MediaConfig) -> Self {
        let storage = Arc::new(LocalFileStorage::new(&media)) as DynFileStorage;
        let state = Self::with_repositories(Repositories::postgres(pool), storage, media);

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));
        info!("📈 Metrics collector started");

        state
    }

    pub fn with_repositories(
        repositories: Repositories,
        storage: DynFileStorage,
        media: MediaConfig,
    ) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        let di_container = DependenciesInject::new(&repositories, storage, &mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
            media,
        }
    }
}
