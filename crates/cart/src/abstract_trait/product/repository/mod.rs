mod query;

pub use self::query::{DynProductQueryRepository, ProductQueryRepositoryTrait};
