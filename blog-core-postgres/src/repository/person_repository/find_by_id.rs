use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Person;
use blog_core_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::PersonRepositoryImpl;

#[async_trait]
impl FindById<Postgres, Person> for PersonRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Person>> {
        let row = sqlx::query("SELECT * FROM person WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(Person::try_from_row).transpose()
    }
}
