use axum::{http::StatusCode, response::IntoResponse, routing::get};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "Pong!")
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/ping", get(ping))
}
