use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{BlogEntry, Persistable};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub(super) async fn insert_entry_impl(
        &self,
        id: Uuid,
        entry: BlogEntry,
    ) -> PersistenceResult<BlogEntry> {
        debug!(%id, creator = %entry.creator_name, "inserting blog entry");

        sqlx::query(
            r#"
            INSERT INTO blog_entry (id, created_by, creation_time, updated_by, updated_time,
                                    blog_id, creator_name, entry)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(entry.audit.created_by())
        .bind(entry.audit.time_of_creation())
        .bind(entry.audit.modified_by())
        .bind(entry.audit.time_of_modification())
        .bind(entry.blog_id)
        .bind(entry.creator_name.as_str())
        .bind(entry.entry.as_str())
        .execute(&*self.pool)
        .await?;

        Ok(entry.with_identity(id))
    }

    pub(super) async fn update_entry_impl(
        &self,
        id: Uuid,
        entry: BlogEntry,
    ) -> PersistenceResult<BlogEntry> {
        debug!(%id, creator = %entry.creator_name, "updating blog entry");

        let result = sqlx::query(
            r#"
            UPDATE blog_entry
            SET updated_by = $2, updated_time = $3, blog_id = $4, creator_name = $5, entry = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(entry.audit.modified_by())
        .bind(entry.audit.time_of_modification())
        .bind(entry.blog_id)
        .bind(entry.creator_name.as_str())
        .bind(entry.entry.as_str())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "blog_entry",
                id,
            });
        }

        Ok(entry)
    }
}

#[async_trait]
impl Save<Postgres, BlogEntry> for BlogRepositoryImpl {
    async fn insert(&self, id: Uuid, item: BlogEntry) -> PersistenceResult<BlogEntry> {
        Self::insert_entry_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: BlogEntry) -> PersistenceResult<BlogEntry> {
        Self::update_entry_impl(self, id, item).await
    }
}
