use blog_core_api::error::PersistenceResult;
use sqlx::Row;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    /// Whether a user exists under the given username.
    pub async fn contains(&self, username: &str) -> PersistenceResult<bool> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE user_name = $1")
            .bind(username)
            .fetch_one(&*self.pool)
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }
}
