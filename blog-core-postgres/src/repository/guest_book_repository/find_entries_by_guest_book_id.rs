use blog_core_api::error::PersistenceResult;
use blog_core_db::models::GuestBookEntry;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::GuestBookRepositoryImpl;

impl GuestBookRepositoryImpl {
    pub async fn find_entries_by_guest_book_id(
        &self,
        guest_book_id: Uuid,
    ) -> PersistenceResult<Vec<GuestBookEntry>> {
        let rows =
            sqlx::query("SELECT * FROM guest_book_entry WHERE guest_book_id = $1 ORDER BY creation_time")
                .bind(guest_book_id)
                .fetch_all(&*self.pool)
                .await?;

        rows.iter().map(GuestBookEntry::try_from_row).collect()
    }
}
