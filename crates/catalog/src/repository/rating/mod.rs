mod command;
mod query;

pub use self::command::RatingCommandRepository;
pub use self::query::RatingQueryRepository;
