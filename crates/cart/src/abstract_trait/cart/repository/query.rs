use crate::model::cart_item::CartItem as CartItemModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_items_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartItemModel>, RepositoryError>;
}
