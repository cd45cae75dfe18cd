mod command;
mod query;

pub use self::command::RatingCommandService;
pub use self::query::RatingQueryService;
