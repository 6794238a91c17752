use crate::{
    abstract_trait::cart::service::{DynCartCommandService, DynCartQueryService},
    domain::{
        requests::cart::{
            AddToCartRequest, ClearCartRequest, IncrementQuantityRequest, RemoveFromCartRequest,
        },
        response::cart::CartItemResponse,
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/cart/{customer_id}",
    tag = "Cart",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Items in the customer's cart, empty when there is none", body = Vec<CartItemResponse>),
        (status = 400, description = "Invalid customer id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartQueryService>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.get_cart(customer_id).await?;
    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    post,
    path = "/cart/add",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Cart item created", body = CartItemResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.add_to_cart(&body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    post,
    path = "/cart/remove",
    tag = "Cart",
    request_body = RemoveFromCartRequest,
    responses(
        (status = 204, description = "Cart item removed, or was already absent"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn remove_from_cart(
    Extension(service): Extension<DynCartCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveFromCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove_from_cart(&body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/cart/increment",
    tag = "Cart",
    request_body = IncrementQuantityRequest,
    responses(
        (status = 200, description = "Quantity incremented", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn increment_quantity(
    Extension(service): Extension<DynCartCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<IncrementQuantityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.increment_quantity(&body).await?;
    Ok((StatusCode::OK, "Quantity updated"))
}

#[utoipa::path(
    post,
    path = "/cart/clear",
    tag = "Cart",
    request_body = ClearCartRequest,
    responses(
        (status = 204, description = "Cart emptied"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ClearCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.clear_cart(&body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cart/{customer_id}", get(get_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/increment", post(increment_quantity))
        .route("/cart/clear", post(clear_cart))
        .layer(Extension(app_state.di_container.cart_query.clone()))
        .layer(Extension(app_state.di_container.cart_command.clone()))
}
