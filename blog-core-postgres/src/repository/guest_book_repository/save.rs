use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{GuestBook, Persistable};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::GuestBookRepositoryImpl;

impl GuestBookRepositoryImpl {
    pub(super) async fn insert_impl(
        &self,
        id: Uuid,
        guest_book: GuestBook,
    ) -> PersistenceResult<GuestBook> {
        debug!(%id, title = %guest_book.title, "inserting guest book");

        sqlx::query(
            r#"
            INSERT INTO guest_book (id, created_by, creation_time, updated_by, updated_time,
                                    title, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(guest_book.audit.created_by())
        .bind(guest_book.audit.time_of_creation())
        .bind(guest_book.audit.modified_by())
        .bind(guest_book.audit.time_of_modification())
        .bind(guest_book.title.as_str())
        .bind(guest_book.user_id)
        .execute(&*self.pool)
        .await?;

        Ok(guest_book.with_identity(id))
    }

    pub(super) async fn update_impl(
        &self,
        id: Uuid,
        guest_book: GuestBook,
    ) -> PersistenceResult<GuestBook> {
        debug!(%id, title = %guest_book.title, "updating guest book");

        let result = sqlx::query(
            r#"
            UPDATE guest_book
            SET updated_by = $2, updated_time = $3, title = $4, user_id = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(guest_book.audit.modified_by())
        .bind(guest_book.audit.time_of_modification())
        .bind(guest_book.title.as_str())
        .bind(guest_book.user_id)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "guest_book",
                id,
            });
        }

        Ok(guest_book)
    }
}

#[async_trait]
impl Save<Postgres, GuestBook> for GuestBookRepositoryImpl {
    async fn insert(&self, id: Uuid, item: GuestBook) -> PersistenceResult<GuestBook> {
        Self::insert_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: GuestBook) -> PersistenceResult<GuestBook> {
        Self::update_impl(self, id, item).await
    }
}
