mod query;

pub use self::query::{DynProductQueryService, ProductQueryServiceTrait};
