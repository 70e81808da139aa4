use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{Blog, Persistable};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub(super) async fn insert_impl(&self, id: Uuid, blog: Blog) -> PersistenceResult<Blog> {
        debug!(%id, title = %blog.title, "inserting blog");

        sqlx::query(
            r#"
            INSERT INTO blog (id, created_by, creation_time, updated_by, updated_time,
                              user_id, created, title)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(blog.audit.created_by())
        .bind(blog.audit.time_of_creation())
        .bind(blog.audit.modified_by())
        .bind(blog.audit.time_of_modification())
        .bind(blog.user_id)
        .bind(blog.created)
        .bind(blog.title.as_str())
        .execute(&*self.pool)
        .await?;

        Ok(blog.with_identity(id))
    }

    pub(super) async fn update_impl(&self, id: Uuid, blog: Blog) -> PersistenceResult<Blog> {
        debug!(%id, title = %blog.title, "updating blog");

        let result = sqlx::query(
            r#"
            UPDATE blog
            SET updated_by = $2, updated_time = $3, user_id = $4, created = $5, title = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(blog.audit.modified_by())
        .bind(blog.audit.time_of_modification())
        .bind(blog.user_id)
        .bind(blog.created)
        .bind(blog.title.as_str())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "blog",
                id,
            });
        }

        Ok(blog)
    }
}

#[async_trait]
impl Save<Postgres, Blog> for BlogRepositoryImpl {
    async fn insert(&self, id: Uuid, item: Blog) -> PersistenceResult<Blog> {
        Self::insert_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: Blog) -> PersistenceResult<Blog> {
        Self::update_impl(self, id, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_user_fixture, setup_test_context, test_blog};
    use blog_core_api::error::PersistenceError;
    use blog_core_db::models::Persistable;
    use blog_core_db::repository::save::Save;
    use sqlx::Row;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_a_blog_without_a_user_is_rejected_before_any_write(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let orphan = test_blog("Orphaned", None);
        let title = orphan.title.clone();

        let result = ctx.repos.blog_repository.save(orphan, "jactor").await;

        assert!(matches!(result, Err(PersistenceError::Validation(_))));

        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM blog WHERE title = $1")
            .bind(&title)
            .fetch_one(&*ctx.pool)
            .await?
            .try_get("count")?;

        assert_eq!(count, 0, "no row may exist after a rejected save");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_saved_blog_is_found_by_title_with_its_owner(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let (_, _, user) = persist_user_fixture(&ctx.repos, "black").await?;
        let user_id = user.identity().as_uuid();

        let blog = test_blog("Blah", user_id);
        ctx.repos.blog_repository.save(blog, "black").await?;

        let found = ctx.repos.blog_repository.find_blogs_by_title("Blah").await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id, user_id);

        Ok(())
    }
}
