use blog_core_api::error::PersistenceResult;
use blog_core_db::models::BlogEntry;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub async fn find_entry_by_id(&self, id: Uuid) -> PersistenceResult<Option<BlogEntry>> {
        let row = sqlx::query("SELECT * FROM blog_entry WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(BlogEntry::try_from_row).transpose()
    }
}
