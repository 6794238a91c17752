use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub const INTERNAL: &'static str = "Internal Server Error";

    pub fn internal() -> Self {
        Self {
            error: Self::INTERNAL.to_string(),
            message: None,
        }
    }
}
