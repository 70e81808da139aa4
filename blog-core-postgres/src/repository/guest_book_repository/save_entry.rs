use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{GuestBookEntry, Persistable};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::GuestBookRepositoryImpl;

impl GuestBookRepositoryImpl {
    pub(super) async fn insert_entry_impl(
        &self,
        id: Uuid,
        entry: GuestBookEntry,
    ) -> PersistenceResult<GuestBookEntry> {
        debug!(%id, guest = %entry.guest_name, "inserting guest book entry");

        sqlx::query(
            r#"
            INSERT INTO guest_book_entry (id, created_by, creation_time, updated_by, updated_time,
                                          guest_book_id, guest_name, entry)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(entry.audit.created_by())
        .bind(entry.audit.time_of_creation())
        .bind(entry.audit.modified_by())
        .bind(entry.audit.time_of_modification())
        .bind(entry.guest_book_id)
        .bind(entry.guest_name.as_str())
        .bind(entry.entry.as_str())
        .execute(&*self.pool)
        .await?;

        Ok(entry.with_identity(id))
    }

    pub(super) async fn update_entry_impl(
        &self,
        id: Uuid,
        entry: GuestBookEntry,
    ) -> PersistenceResult<GuestBookEntry> {
        debug!(%id, guest = %entry.guest_name, "updating guest book entry");

        let result = sqlx::query(
            r#"
            UPDATE guest_book_entry
            SET updated_by = $2, updated_time = $3, guest_book_id = $4, guest_name = $5, entry = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(entry.audit.modified_by())
        .bind(entry.audit.time_of_modification())
        .bind(entry.guest_book_id)
        .bind(entry.guest_name.as_str())
        .bind(entry.entry.as_str())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "guest_book_entry",
                id,
            });
        }

        Ok(entry)
    }
}

#[async_trait]
impl Save<Postgres, GuestBookEntry> for GuestBookRepositoryImpl {
    async fn insert(&self, id: Uuid, item: GuestBookEntry) -> PersistenceResult<GuestBookEntry> {
        Self::insert_entry_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: GuestBookEntry) -> PersistenceResult<GuestBookEntry> {
        Self::update_entry_impl(self, id, item).await
    }
}
