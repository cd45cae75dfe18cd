mod command;
mod query;

pub use self::command::CategoryCommandServiceTrait;
pub use self::query::CategoryQueryServiceTrait;
