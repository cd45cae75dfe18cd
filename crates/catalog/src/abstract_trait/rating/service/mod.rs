mod command;
mod query;

pub use self::command::RatingCommandServiceTrait;
pub use self::query::RatingQueryServiceTrait;
