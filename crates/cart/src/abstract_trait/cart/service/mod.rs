mod command;
mod query;

pub use self::command::{CartCommandServiceTrait, DynCartCommandService};
pub use self::query::{CartQueryServiceTrait, DynCartQueryService};
