use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Address;
use blog_core_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::AddressRepositoryImpl;

#[async_trait]
impl FindById<Postgres, Address> for AddressRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Address>> {
        let row = sqlx::query("SELECT * FROM address WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(Address::try_from_row).transpose()
    }
}
