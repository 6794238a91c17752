use crate::domain::response::cart::CartItemResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartQueryService = Arc<dyn CartQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryServiceTrait {
    async fn get_cart(&self, customer_id: i32) -> Result<Vec<CartItemResponse>, ServiceError>;
}
