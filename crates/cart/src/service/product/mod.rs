mod query;

pub use self::query::{ProductQueryService, ProductQueryServiceDeps};
