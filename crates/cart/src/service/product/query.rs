use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Metrics, Operation, Status as StatusUtils},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

pub struct ProductQueryServiceDeps {
    pub query: DynProductQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductQueryService {
    pub async fn new(deps: ProductQueryServiceDeps) -> Self {
        let ProductQueryServiceDeps { query, registry } = deps;
        let metrics = Metrics::new();

        metrics.register(
            &mut *registry.lock().await,
            "product_query_service",
            "ProductQueryService",
        );

        Self { query, metrics }
    }

    fn complete_operation(&self, start: Instant, operation: Operation, is_success: bool, message: &str) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics
            .record(operation, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let start = Instant::now();

        match self.query.find_all().await {
            Ok(products) => {
                self.complete_operation(
                    start,
                    Operation::ListProducts,
                    true,
                    &format!("Retrieved {} products", products.len()),
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::ListProducts,
                    false,
                    &format!("Failed to retrieve products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
