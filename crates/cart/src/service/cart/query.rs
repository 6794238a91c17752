use crate::{
    abstract_trait::cart::{repository::DynCartQueryRepository, service::CartQueryServiceTrait},
    domain::response::cart::CartItemResponse,
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
pub struct CartQueryService {
    query: DynCartQueryRepository,
    metrics: Metrics,
}

pub struct CartQueryServiceDeps {
    pub query: DynCartQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl CartQueryService {
    pub async fn new(deps: CartQueryServiceDeps) -> Self {
        let CartQueryServiceDeps { query, registry } = deps;
        let metrics = Metrics::new();

        metrics.register(
            &mut *registry.lock().await,
            "cart_query_service",
            "CartQueryService",
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
impl CartQueryServiceTrait for CartQueryService {
    async fn get_cart(&self, customer_id: i32) -> Result<Vec<CartItemResponse>, ServiceError> {
        info!("🛒 Getting cart for customer {customer_id}");

        let start = Instant::now();

        if customer_id < 1 {
            let message = "customer_id must be a positive integer".to_string();
            self.complete_operation(start, Operation::GetCart, false, &message);
            return Err(ServiceError::Validation(vec![message]));
        }

        match self.query.find_items_by_customer(customer_id).await {
            Ok(items) => {
                self.complete_operation(
                    start,
                    Operation::GetCart,
                    true,
                    &format!(
                        "Retrieved {} cart items for customer {customer_id}",
                        items.len()
                    ),
                );
                Ok(items.into_iter().map(CartItemResponse::from).collect())
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::GetCart,
                    false,
                    &format!("Failed to retrieve cart for customer {customer_id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
