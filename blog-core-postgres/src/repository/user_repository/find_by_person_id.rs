use blog_core_api::error::PersistenceResult;
use blog_core_db::models::User;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub async fn find_by_person_id(&self, person_id: Uuid) -> PersistenceResult<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users WHERE person_id = $1")
            .bind(person_id)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(User::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_user_fixture, setup_test_context};
    use blog_core_db::models::Persistable;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_find_by_person_id_returns_the_accounts_of_that_person(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let (_, person, user) = persist_user_fixture(&ctx.repos, "accounted").await?;
        let person_id = person.identity().as_uuid().ok_or("fixture not persisted")?;

        let users = ctx.repos.user_repository.find_by_person_id(person_id).await?;

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].identity(), user.identity());
        assert_eq!(users[0].username, "accounted");

        let unrelated = ctx
            .repos
            .user_repository
            .find_by_person_id(Uuid::now_v7())
            .await?;
        assert!(unrelated.is_empty());

        Ok(())
    }
}
