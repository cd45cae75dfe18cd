pub mod abstract_trait;
pub mod di;
pub mod domain;
pub mod model;
pub mod repository;
pub mod service;

use shared::config::ConnectionPool;

pub async fn run_migrations(pool: &ConnectionPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
