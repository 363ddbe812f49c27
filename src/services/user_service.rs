use crate::error::Result;
use crate::models::user::User;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, first_name: &str, last_name: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name)
            VALUES (?1, ?2)
            RETURNING user_id, first_name, last_name
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = user.user_id, "User added");
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT user_id, first_name, last_name FROM users ORDER BY user_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
