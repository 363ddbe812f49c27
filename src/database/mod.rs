pub mod pool;

use crate::error::Result;
use sqlx::SqlitePool;

/// Applies the embedded migrations. Already-applied migrations are skipped,
/// so this is safe to run on every start.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
pub async fn create_test_pool() -> Result<SqlitePool> {
    let pool = pool::create_pool("sqlite::memory:", 1).await?;
    migrate(&pool).await?;
    Ok(pool)
}
