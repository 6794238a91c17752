use crate::{
    abstract_trait::cart::repository::CartQueryRepositoryTrait,
    model::cart_item::CartItem as CartItemModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_items_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartItemModel>, RepositoryError> {
        info!("🛒 Fetching cart items for customer {}", customer_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::acquire(e)
        })?;

        let items = sqlx::query_as::<_, CartItemModel>(
            r#"
            SELECT cart_item_id, cart_id, product_id, quantity
            FROM cart_item
            WHERE cart_id = (
                SELECT cart_id FROM cart
                WHERE customer_id = $1
            )
            ORDER BY cart_item_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch cart items for customer {}: {:?}",
                customer_id, e
            );
            RepositoryError::statement(e)
        })?;

        Ok(items)
    }
}
