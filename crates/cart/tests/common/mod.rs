#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use cart::{
    abstract_trait::{
        cart::repository::{CartCommandRepositoryTrait, CartQueryRepositoryTrait},
        product::repository::ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::cart::AddToCartRequest,
    handler::AppRouter,
    model::{cart::Cart, cart_item::CartItem, product::Product},
    state::AppState,
};
use serde_json::{Value, json};
use shared::errors::RepositoryError;
use sqlx::types::Json;
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceExt;

/// Table contents mirrored in memory, with the same constraints the schema enforces.
#[derive(Debug, Default)]
pub struct Store {
    pub products: Vec<Product>,
    pub carts: Vec<Cart>,
    pub items: Vec<CartItem>,
    next_cart_id: i32,
    next_item_id: i32,
}

impl Store {
    pub fn add_product(&mut self, name: &str, price: i64) -> i32 {
        let product_id = self.products.len() as i32 + 1;
        let columns = json!({ "product_id": product_id, "name": name, "price": price });
        self.products.push(Product {
            product_id,
            columns: Json(columns.as_object().cloned().unwrap_or_default()),
        });
        product_id
    }

    fn upsert_cart(&mut self, customer_id: i32) -> i32 {
        if let Some(cart) = self.carts.iter().find(|c| c.customer_id == customer_id) {
            return cart.cart_id;
        }
        self.next_cart_id += 1;
        self.carts.push(Cart {
            cart_id: self.next_cart_id,
            customer_id,
        });
        self.next_cart_id
    }

    fn insert_item(
        &mut self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        if !self.products.iter().any(|p| p.product_id == product_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "product {product_id} does not exist"
            )));
        }
        self.next_item_id += 1;
        let item = CartItem {
            cart_item_id: self.next_item_id,
            cart_id,
            product_id,
            quantity,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn quantity_of(&self, cart_item_id: i32) -> Option<i32> {
        self.items
            .iter()
            .find(|i| i.cart_item_id == cart_item_id)
            .map(|i| i.quantity)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryRepository {
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("store lock poisoned")
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for InMemoryRepository {
    async fn find_items_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartItem>, RepositoryError> {
        let store = self.store();
        let Some(cart) = store.carts.iter().find(|c| c.customer_id == customer_id) else {
            return Ok(Vec::new());
        };
        Ok(store
            .items
            .iter()
            .filter(|i| i.cart_id == cart.cart_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for InMemoryRepository {
    async fn add_item(&self, req: &AddToCartRequest) -> Result<Option<CartItem>, RepositoryError> {
        let mut store = self.store();
        let cart_id = match req.cart_id {
            Some(cart_id) => {
                let owned = store
                    .carts
                    .iter()
                    .any(|c| c.cart_id == cart_id && c.customer_id == req.customer_id);
                if !owned {
                    return Ok(None);
                }
                cart_id
            }
            None => store.upsert_cart(req.customer_id),
        };
        store
            .insert_item(cart_id, req.product_id, req.quantity)
            .map(Some)
    }

    async fn remove_item(&self, cart_item_id: i32) -> Result<u64, RepositoryError> {
        let mut store = self.store();
        let before = store.items.len();
        store.items.retain(|i| i.cart_item_id != cart_item_id);
        Ok((before - store.items.len()) as u64)
    }

    async fn increment_quantity(
        &self,
        cart_item_id: i32,
        delta: i32,
    ) -> Result<u64, RepositoryError> {
        let mut store = self.store();
        let Some(item) = store
            .items
            .iter_mut()
            .find(|i| i.cart_item_id == cart_item_id)
        else {
            return Ok(0);
        };
        let next = item.quantity + delta;
        if next <= 0 {
            return Err(RepositoryError::Check("quantity must be positive".into()));
        }
        item.quantity = next;
        Ok(1)
    }

    async fn clear_cart(&self, cart_id: i32) -> Result<u64, RepositoryError> {
        let mut store = self.store();
        let before = store.items.len();
        store.items.retain(|i| i.cart_id != cart_id);
        Ok((before - store.items.len()) as u64)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.store().products.clone())
    }
}

pub async fn app_with(repo: &InMemoryRepository) -> Router {
    let deps = DependenciesInjectDeps {
        cart_query: Arc::new(repo.clone()),
        cart_command: Arc::new(repo.clone()),
        product_query: Arc::new(repo.clone()),
    };
    AppRouter::build(AppState::from_deps(deps).await)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, bytes)
}

pub fn json(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}
