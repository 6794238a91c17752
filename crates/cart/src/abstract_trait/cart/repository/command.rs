use crate::{domain::requests::cart::AddToCartRequest, model::cart_item::CartItem as CartItemModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;

/// Write operations report the number of rows they touched; zero is not an error.
#[async_trait]
pub trait CartCommandRepositoryTrait {
    /// Returns `None` when `req.cart_id` names a cart owned by another customer.
    async fn add_item(
        &self,
        req: &AddToCartRequest,
    ) -> Result<Option<CartItemModel>, RepositoryError>;
    async fn remove_item(&self, cart_item_id: i32) -> Result<u64, RepositoryError>;
    async fn increment_quantity(&self, cart_item_id: i32, delta: i32)
    -> Result<u64, RepositoryError>;
    async fn clear_cart(&self, cart_id: i32) -> Result<u64, RepositoryError>;
}
