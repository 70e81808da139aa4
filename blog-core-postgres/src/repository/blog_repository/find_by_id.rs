use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Blog;
use blog_core_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::BlogRepositoryImpl;

#[async_trait]
impl FindById<Postgres, Blog> for BlogRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Blog>> {
        let row = sqlx::query("SELECT * FROM blog WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(Blog::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_blog_fixture, setup_test_context};
    use blog_core_db::models::Persistable;
    use blog_core_db::repository::find_by_id::FindById;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_a_saved_blog_is_found_by_its_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let blog = persist_blog_fixture(&ctx.repos, "finder", "Findable").await?;
        let id = blog.identity().as_uuid().unwrap();

        let found = ctx
            .repos
            .blog_repository
            .find_by_id(id)
            .await?
            .ok_or("blog not found")?;

        assert_eq!(found.title, "Findable");
        assert_eq!(found.user_id, blog.user_id);

        Ok(())
    }
}
