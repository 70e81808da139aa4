use blog_core_api::error::PersistenceResult;
use blog_core_db::models::BlogEntry;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub async fn find_entries_by_blog_id(&self, blog_id: Uuid) -> PersistenceResult<Vec<BlogEntry>> {
        let rows = sqlx::query("SELECT * FROM blog_entry WHERE blog_id = $1 ORDER BY creation_time")
            .bind(blog_id)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(BlogEntry::try_from_row).collect()
    }
}
