use crate::{
    abstract_trait::cart::repository::CartCommandRepositoryTrait,
    domain::requests::cart::AddToCartRequest,
    model::{cart::Cart as CartModel, cart_item::CartItem as CartItemModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn add_item(
        &self,
        req: &AddToCartRequest,
    ) -> Result<Option<CartItemModel>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::acquire(e)
        })?;

        let item = match req.cart_id {
            Some(cart_id) => sqlx::query_as::<_, CartItemModel>(
                r#"
                INSERT INTO cart_item (cart_id, product_id, quantity)
                SELECT c.cart_id, $2, $3
                FROM cart c
                WHERE c.cart_id = $1 AND c.customer_id = $4
                RETURNING cart_item_id, cart_id, product_id, quantity
                "#,
            )
            .bind(cart_id)
            .bind(req.product_id)
            .bind(req.quantity)
            .bind(req.customer_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to add item to cart {}: {:?}", cart_id, e);
                RepositoryError::statement(e)
            })?,
            None => {
                // Upsert keeps one cart per customer even under concurrent first adds.
                let cart = sqlx::query_as::<_, CartModel>(
                    r#"
                    INSERT INTO cart (customer_id)
                    VALUES ($1)
                    ON CONFLICT (customer_id)
                    DO UPDATE SET customer_id = EXCLUDED.customer_id
                    RETURNING cart_id, customer_id
                    "#,
                )
                .bind(req.customer_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    error!(
                        "❌ Failed to resolve cart for customer {}: {:?}",
                        req.customer_id, e
                    );
                    RepositoryError::statement(e)
                })?;

                info!(
                    "🧺 Using cart {} for customer {}",
                    cart.cart_id, cart.customer_id
                );

                let item = sqlx::query_as::<_, CartItemModel>(
                    r#"
                    INSERT INTO cart_item (cart_id, product_id, quantity)
                    VALUES ($1, $2, $3)
                    RETURNING cart_item_id, cart_id, product_id, quantity
                    "#,
                )
                .bind(cart.cart_id)
                .bind(req.product_id)
                .bind(req.quantity)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    error!("❌ Failed to add item to cart {}: {:?}", cart.cart_id, e);
                    RepositoryError::statement(e)
                })?;

                Some(item)
            }
        };

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit add-to-cart: {:?}", e);
            RepositoryError::statement(e)
        })?;

        if let Some(item) = &item {
            info!(
                "✅ Added cart item {} (product {}, qty {}) to cart {}",
                item.cart_item_id, item.product_id, item.quantity, item.cart_id
            );
        }

        Ok(item)
    }

    async fn remove_item(&self, cart_item_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::acquire(e)
        })?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart_item
            WHERE cart_item_id = $1
            "#,
        )
        .bind(cart_item_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to remove cart item {}: {:?}", cart_item_id, e);
            RepositoryError::statement(e)
        })?;

        info!("🗑️ Removed cart item {}", cart_item_id);
        Ok(result.rows_affected())
    }

    async fn increment_quantity(
        &self,
        cart_item_id: i32,
        delta: i32,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::acquire(e)
        })?;

        let result = sqlx::query(
            r#"
            UPDATE cart_item
            SET quantity = quantity + $2
            WHERE cart_item_id = $1
            "#,
        )
        .bind(cart_item_id)
        .bind(delta)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to increment cart item {} by {}: {:?}",
                cart_item_id, delta, e
            );
            RepositoryError::statement(e)
        })?;

        info!("🔄 Incremented cart item {} by {}", cart_item_id, delta);
        Ok(result.rows_affected())
    }

    async fn clear_cart(&self, cart_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::acquire(e)
        })?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart_item
            WHERE cart_id = $1
            "#,
        )
        .bind(cart_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to clear cart {}: {:?}", cart_id, e);
            RepositoryError::statement(e)
        })?;

        info!("🧹 Cleared cart {}", cart_id);
        Ok(result.rows_affected())
    }
}
