use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[validate(range(min = 1, message = "product_id must be a positive integer"))]
    pub product_id: i32,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(range(min = 1, message = "customer_id must be a positive integer"))]
    pub customer_id: i32,

    /// Existing cart to add to. When absent the customer's cart is created or reused.
    #[serde(default)]
    #[validate(range(min = 1, message = "cart_id must be a positive integer"))]
    pub cart_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RemoveFromCartRequest {
    #[validate(range(min = 1, message = "cart_item_id must be a positive integer"))]
    pub cart_item_id: i32,
}

/// `quantity` is a signed delta added to the stored quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct IncrementQuantityRequest {
    #[validate(range(min = 1, message = "cart_item_id must be a positive integer"))]
    pub cart_item_id: i32,

    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClearCartRequest {
    #[validate(range(min = 1, message = "cart_id must be a positive integer"))]
    pub cart_id: i32,
}
