//! Store-level failures against the real sqlx repositories.
//!
//! The pool points at a closed local port, so every acquire fails without any
//! database being installed. Connection release after a failed statement is
//! covered in `postgres.rs`, which needs a live server.

mod common;

use axum::http::{Method, StatusCode};
use cart::{handler::AppRouter, state::AppState};
use common::{json, send};
use serde_json::json;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::time::Duration;

fn unreachable_pool() -> PgPool {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("cart")
        .password("cart")
        .database("shop")
        .ssl_mode(PgSslMode::Disable);

    PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy_with(options)
}

#[tokio::test]
async fn every_store_endpoint_answers_generic_500() {
    let pool = unreachable_pool();
    let app = AppRouter::build(AppState::new(pool.clone()).await);

    let requests = [
        (Method::GET, "/products", None),
        (Method::GET, "/cart/7", None),
        (
            Method::POST,
            "/cart/add",
            Some(json!({ "product_id": 1, "quantity": 1, "customer_id": 7 })),
        ),
        (
            Method::POST,
            "/cart/add",
            Some(json!({ "product_id": 1, "quantity": 1, "customer_id": 7, "cart_id": 3 })),
        ),
        (Method::POST, "/cart/remove", Some(json!({ "cart_item_id": 1 }))),
        (
            Method::POST,
            "/cart/increment",
            Some(json!({ "cart_item_id": 1, "quantity": 2 })),
        ),
        (Method::POST, "/cart/clear", Some(json!({ "cart_id": 1 }))),
    ];

    for (method, uri, body) in requests {
        let (status, bytes) = send(&app, method.clone(), uri, body).await;

        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri} should fail"
        );
        assert_eq!(
            json(&bytes),
            json!({ "error": "Internal Server Error" }),
            "{method} {uri} leaked error details"
        );
    }

    pool.close().await;
}

#[tokio::test]
async fn ping_does_not_need_the_store() {
    let pool = unreachable_pool();
    let app = AppRouter::build(AppState::new(pool.clone()).await);

    let (status, body) = send(&app, Method::GET, "/ping", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"Pong!");

    pool.close().await;
}

#[tokio::test]
async fn validation_failures_win_over_store_failures() {
    let pool = unreachable_pool();
    let app = AppRouter::build(AppState::new(pool.clone()).await);

    let (status, _) = send(
        &app,
        Method::POST,
        "/cart/clear",
        Some(json!({ "cart_id": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    pool.close().await;
}
