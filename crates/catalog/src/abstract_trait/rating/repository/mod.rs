mod command;
mod query;

pub use self::command::{DynRatingCommandRepository, RatingCommandRepositoryTrait};
pub use self::query::{DynRatingQueryRepository, RatingQueryRepositoryTrait};
