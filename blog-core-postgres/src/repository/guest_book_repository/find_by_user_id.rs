use blog_core_api::error::PersistenceResult;
use blog_core_db::models::GuestBook;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::GuestBookRepositoryImpl;

impl GuestBookRepositoryImpl {
    pub async fn find_by_user_id(&self, user_id: Uuid) -> PersistenceResult<Option<GuestBook>> {
        let row = sqlx::query("SELECT * FROM guest_book WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(GuestBook::try_from_row).transpose()
    }
}
