use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body extractor that runs `validator` rules before the handler sees the value.
///
/// Malformed bodies keep the status axum's JSON rejection chose; rule violations
/// answer 400 with a per-field breakdown.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "error": "Invalid JSON",
                    "message": rejection.body_text(),
                });
                (rejection.status(), Json(payload))
            })?;

        value.validate().map_err(|errors| {
            let payload = json!({
                "error": "Validation failed",
                "message": format_validation_errors(&errors),
                "details": format_validation_errors_detailed(&errors),
            });
            (StatusCode::BAD_REQUEST, Json(payload))
        })?;

        Ok(Self(value))
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "range" => format!("{field} out of range"),
            "required" => format!("{field} is required"),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", describe(&field, e)))
        })
        .collect();
    messages.sort();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::cart::AddToCartRequest;

    #[test]
    fn collects_every_failing_field() {
        let req = AddToCartRequest {
            product_id: 0,
            quantity: 0,
            customer_id: 7,
            cart_id: Some(-1),
        };
        let errors = req.validate().expect_err("request should be invalid");

        let summary = format_validation_errors(&errors);
        assert!(summary.contains("quantity: quantity must be at least 1"));
        assert!(summary.contains("product_id: product_id must be a positive integer"));
        assert!(summary.contains("cart_id: cart_id must be a positive integer"));
        assert!(!summary.contains("customer_id"));

        let details = format_validation_errors_detailed(&errors);
        assert_eq!(details["quantity"], json!(["quantity must be at least 1"]));
    }

    #[test]
    fn absent_cart_id_is_valid() {
        let req = AddToCartRequest {
            product_id: 3,
            quantity: 2,
            customer_id: 7,
            cart_id: None,
        };
        assert!(req.validate().is_ok());
    }
}
