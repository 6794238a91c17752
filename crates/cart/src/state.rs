use crate::di::{DependenciesInject, DependenciesInjectDeps};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the PostgreSQL repositories over `pool`. The caller keeps ownership
    /// of the pool and is responsible for closing it on shutdown.
    pub async fn new(pool: ConnectionPool) -> Self {
        Self::from_deps(DependenciesInjectDeps::postgres(pool)).await
    }

    pub async fn from_deps(deps: DependenciesInjectDeps) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let di_container = DependenciesInject::new(deps, registry.clone()).await;

        Self {
            di_container,
            registry,
        }
    }
}
