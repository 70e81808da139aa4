use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::GuestBook;
use blog_core_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::GuestBookRepositoryImpl;

#[async_trait]
impl FindById<Postgres, GuestBook> for GuestBookRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<GuestBook>> {
        let row = sqlx::query("SELECT * FROM guest_book WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(GuestBook::try_from_row).transpose()
    }
}
