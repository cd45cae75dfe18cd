mod command;
mod query;

pub use self::command::{CategoryCommandRepositoryTrait, DynCategoryCommandRepository};
pub use self::query::{CategoryQueryRepositoryTrait, DynCategoryQueryRepository};
