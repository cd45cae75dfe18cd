mod command;
mod query;

pub use self::command::ProductCommandServiceTrait;
pub use self::query::ProductQueryServiceTrait;
