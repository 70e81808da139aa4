use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Blog;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::BlogRepositoryImpl;

impl BlogRepositoryImpl {
    pub async fn find_blogs_by_user_id(&self, user_id: Uuid) -> PersistenceResult<Vec<Blog>> {
        let rows = sqlx::query("SELECT * FROM blog WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(Blog::try_from_row).collect()
    }
}
