use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Errors surfaced at the HTTP boundary.
///
/// `Internal` carries a diagnostic that is logged and never sent to the client;
/// every store failure answers with the same generic body.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),
            ServiceError::Repo(repo_err) => HttpError::Internal(repo_err.to_string()),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(msg) => {
                let body = Json(ErrorResponse {
                    error: "Bad Request".into(),
                    message: Some(msg),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            HttpError::Internal(msg) => {
                error!("💥 Request failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal()),
                )
                    .into_response()
            }
        }
    }
}
