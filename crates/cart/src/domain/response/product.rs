use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One product row keyed by column name, e.g. `{"product_id":1,"name":"Teapot","price":2500}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ProductResponse(pub Map<String, Value>);

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse(value.columns.0)
    }
}
