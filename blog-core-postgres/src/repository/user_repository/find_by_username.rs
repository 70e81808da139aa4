use blog_core_api::error::PersistenceResult;
use blog_core_db::models::User;

use crate::utils::TryFromRow;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub async fn find_by_username(&self, username: &str) -> PersistenceResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE user_name = $1")
            .bind(username)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(User::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_user_fixture, setup_test_context};
    use blog_core_db::models::Persistable;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_find_by_username() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let (_, _, user) = persist_user_fixture(&ctx.repos, "seiketsu").await?;

        let found = ctx
            .repos
            .user_repository
            .find_by_username("seiketsu")
            .await?
            .expect("persisted username should be findable");

        assert_eq!(found.identity(), user.identity());

        let unknown = ctx.repos.user_repository.find_by_username("nobody").await?;
        assert!(unknown.is_none());

        Ok(())
    }
}
