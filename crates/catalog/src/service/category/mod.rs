mod command;
mod query;

pub use self::command::CategoryCommandService;
pub use self::query::CategoryQueryService;
