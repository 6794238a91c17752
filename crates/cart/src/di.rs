use crate::{
    abstract_trait::{
        cart::{
            repository::{DynCartCommandRepository, DynCartQueryRepository},
            service::{DynCartCommandService, DynCartQueryService},
        },
        product::{repository::DynProductQueryRepository, service::DynProductQueryService},
    },
    repository::{
        cart::{CartCommandRepository, CartQueryRepository},
        product::ProductQueryRepository,
    },
    service::{
        cart::{CartCommandService, CartCommandServiceDeps, CartQueryService, CartQueryServiceDeps},
        product::{ProductQueryService, ProductQueryServiceDeps},
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub cart_query: DynCartQueryService,
    pub cart_command: DynCartCommandService,
    pub product_query: DynProductQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("cart_query", &"CartQueryService")
            .field("cart_command", &"CartCommandService")
            .field("product_query", &"ProductQueryService")
            .finish()
    }
}

/// Repositories the services are built on.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub cart_query: DynCartQueryRepository,
    pub cart_command: DynCartCommandRepository,
    pub product_query: DynProductQueryRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            cart_query: Arc::new(CartQueryRepository::new(pool.clone())),
            cart_command: Arc::new(CartCommandRepository::new(pool.clone())),
            product_query: Arc::new(ProductQueryRepository::new(pool)),
        }
    }
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps, registry: Arc<Mutex<Registry>>) -> Self {
        let DependenciesInjectDeps {
            cart_query,
            cart_command,
            product_query,
        } = deps;

        let cart_query: DynCartQueryService = Arc::new(
            CartQueryService::new(CartQueryServiceDeps {
                query: cart_query,
                registry: registry.clone(),
            })
            .await,
        );

        let cart_command: DynCartCommandService = Arc::new(
            CartCommandService::new(CartCommandServiceDeps {
                command: cart_command,
                registry: registry.clone(),
            })
            .await,
        );

        let product_query: DynProductQueryService = Arc::new(
            ProductQueryService::new(ProductQueryServiceDeps {
                query: product_query,
                registry,
            })
            .await,
        );

        Self {
            cart_query,
            cart_command,
            product_query,
        }
    }
}
