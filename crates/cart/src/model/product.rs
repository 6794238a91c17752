use serde_json::{Map, Value};
use sqlx::{FromRow, types::Json};

/// A catalogue row. Only `product_id` is relied on; the remaining columns
/// vary between stores and are carried through as stored.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub columns: Json<Map<String, Value>>,
}
