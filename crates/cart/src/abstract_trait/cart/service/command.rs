use crate::domain::{
    requests::cart::{
        AddToCartRequest, ClearCartRequest, IncrementQuantityRequest, RemoveFromCartRequest,
    },
    response::cart::CartItemResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<CartItemResponse, ServiceError>;
    async fn remove_from_cart(&self, req: &RemoveFromCartRequest) -> Result<(), ServiceError>;
    async fn increment_quantity(&self, req: &IncrementQuantityRequest)
    -> Result<(), ServiceError>;
    async fn clear_cart(&self, req: &ClearCartRequest) -> Result<(), ServiceError>;
}
