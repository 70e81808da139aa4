use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Blog;

use crate::utils::TryFromRow;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub async fn find_blogs_by_title(&self, title: &str) -> PersistenceResult<Vec<Blog>> {
        let rows = sqlx::query("SELECT * FROM blog WHERE title = $1")
            .bind(title)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(Blog::try_from_row).collect()
    }
}
