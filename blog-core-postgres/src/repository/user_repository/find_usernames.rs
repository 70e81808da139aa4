use blog_core_api::dto::UserType;
use blog_core_api::error::PersistenceResult;
use sqlx::Row;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    /// Distinct usernames of the users matching one of the given types.
    pub async fn find_usernames(&self, user_types: &[UserType]) -> PersistenceResult<Vec<String>> {
        let type_names: Vec<String> = user_types.iter().map(UserType::to_string).collect();

        let rows = sqlx::query("SELECT DISTINCT user_name FROM users WHERE user_type = ANY($1)")
            .bind(&type_names)
            .fetch_all(&*self.pool)
            .await?;

        let mut usernames = Vec::with_capacity(rows.len());
        for row in rows {
            usernames.push(row.try_get("user_name")?);
        }

        Ok(usernames)
    }
}
