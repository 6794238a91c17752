mod command;
mod query;

pub use self::command::{CartCommandService, CartCommandServiceDeps};
pub use self::query::{CartQueryService, CartQueryServiceDeps};
