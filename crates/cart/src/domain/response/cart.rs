use crate::model::cart_item::CartItem as CartItemModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct CartItemResponse {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<CartItemModel> for CartItemResponse {
    fn from(value: CartItemModel) -> Self {
        CartItemResponse {
            cart_item_id: value.cart_item_id,
            cart_id: value.cart_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
