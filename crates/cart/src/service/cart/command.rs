use crate::{
    abstract_trait::cart::{
        repository::DynCartCommandRepository, service::CartCommandServiceTrait,
    },
    domain::{
        requests::cart::{
            AddToCartRequest, ClearCartRequest, IncrementQuantityRequest, RemoveFromCartRequest,
        },
        response::cart::CartItemResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Metrics, Operation, Status as StatusUtils},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct CartCommandService {
    command: DynCartCommandRepository,
    metrics: Metrics,
}

pub struct CartCommandServiceDeps {
    pub command: DynCartCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl CartCommandService {
    pub async fn new(deps: CartCommandServiceDeps) -> Self {
        let CartCommandServiceDeps { command, registry } = deps;
        let metrics = Metrics::new();

        metrics.register(
            &mut *registry.lock().await,
            "cart_command_service",
            "CartCommandService",
        );

        Self { command, metrics }
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
impl CartCommandServiceTrait for CartCommandService {
    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<CartItemResponse, ServiceError> {
        info!(
            "➕ Adding product {} (qty {}) for customer {}, cart {:?}",
            req.product_id, req.quantity, req.customer_id, req.cart_id
        );

        let start = Instant::now();

        match self.command.add_item(req).await {
            Ok(Some(item)) => {
                self.complete_operation(
                    start,
                    Operation::AddToCart,
                    true,
                    &format!("Added cart item {} to cart {}", item.cart_item_id, item.cart_id),
                );
                Ok(CartItemResponse::from(item))
            }
            Ok(None) => {
                let message = format!(
                    "cart_id {} does not belong to customer_id {}",
                    req.cart_id.unwrap_or_default(),
                    req.customer_id
                );
                self.complete_operation(start, Operation::AddToCart, false, &message);
                Err(ServiceError::Validation(vec![message]))
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::AddToCart,
                    false,
                    &format!("Failed to add item for customer {}: {e}", req.customer_id),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn remove_from_cart(&self, req: &RemoveFromCartRequest) -> Result<(), ServiceError> {
        let start = Instant::now();

        match self.command.remove_item(req.cart_item_id).await {
            Ok(affected) => {
                if affected == 0 {
                    warn!("Cart item {} not present, nothing removed", req.cart_item_id);
                }
                self.complete_operation(
                    start,
                    Operation::RemoveFromCart,
                    true,
                    &format!("Removed cart item {}", req.cart_item_id),
                );
                Ok(())
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::RemoveFromCart,
                    false,
                    &format!("Failed to remove cart item {}: {e}", req.cart_item_id),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn increment_quantity(
        &self,
        req: &IncrementQuantityRequest,
    ) -> Result<(), ServiceError> {
        let start = Instant::now();

        match self
            .command
            .increment_quantity(req.cart_item_id, req.quantity)
            .await
        {
            Ok(affected) => {
                if affected == 0 {
                    warn!("Cart item {} not present, quantity unchanged", req.cart_item_id);
                }
                self.complete_operation(
                    start,
                    Operation::IncrementQuantity,
                    true,
                    &format!(
                        "Incremented cart item {} by {}",
                        req.cart_item_id, req.quantity
                    ),
                );
                Ok(())
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::IncrementQuantity,
                    false,
                    &format!("Failed to increment cart item {}: {e}", req.cart_item_id),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn clear_cart(&self, req: &ClearCartRequest) -> Result<(), ServiceError> {
        let start = Instant::now();

        match self.command.clear_cart(req.cart_id).await {
            Ok(affected) => {
                self.complete_operation(
                    start,
                    Operation::ClearCart,
                    true,
                    &format!("Cleared {affected} items from cart {}", req.cart_id),
                );
                Ok(())
            }
            Err(e) => {
                self.complete_operation(
                    start,
                    Operation::ClearCart,
                    false,
                    &format!("Failed to clear cart {}: {e}", req.cart_id),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
