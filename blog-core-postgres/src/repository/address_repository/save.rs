use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{Address, Persistable};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::AddressRepositoryImpl;

impl AddressRepositoryImpl {
    pub(super) async fn insert_impl(&self, id: Uuid, address: Address) -> PersistenceResult<Address> {
        debug!(%id, "inserting address");

        sqlx::query(
            r#"
            INSERT INTO address (id, created_by, creation_time, updated_by, updated_time,
                                 address_line_1, address_line_2, address_line_3, city, country, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(id)
        .bind(address.audit.created_by())
        .bind(address.audit.time_of_creation())
        .bind(address.audit.modified_by())
        .bind(address.audit.time_of_modification())
        .bind(address.address_line_1.as_str())
        .bind(address.address_line_2.as_deref())
        .bind(address.address_line_3.as_deref())
        .bind(address.city.as_str())
        .bind(address.country.as_deref())
        .bind(address.zip_code.as_str())
        .execute(&*self.pool)
        .await?;

        Ok(address.with_identity(id))
    }

    pub(super) async fn update_impl(&self, id: Uuid, address: Address) -> PersistenceResult<Address> {
        debug!(%id, "updating address");

        let result = sqlx::query(
            r#"
            UPDATE address
            SET updated_by = $2, updated_time = $3, address_line_1 = $4, address_line_2 = $5,
                address_line_3 = $6, city = $7, country = $8, zip_code = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(address.audit.modified_by())
        .bind(address.audit.time_of_modification())
        .bind(address.address_line_1.as_str())
        .bind(address.address_line_2.as_deref())
        .bind(address.address_line_3.as_deref())
        .bind(address.city.as_str())
        .bind(address.country.as_deref())
        .bind(address.zip_code.as_str())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "address",
                id,
            });
        }

        Ok(address)
    }
}

#[async_trait]
impl Save<Postgres, Address> for AddressRepositoryImpl {
    async fn insert(&self, id: Uuid, item: Address) -> PersistenceResult<Address> {
        Self::insert_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: Address) -> PersistenceResult<Address> {
        Self::update_impl(self, id, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{setup_test_context, test_address};
    use blog_core_api::error::PersistenceError;
    use blog_core_db::models::Persistable;
    use blog_core_db::repository::find_by_id::FindById;
    use blog_core_db::repository::save::Save;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_save_inserts_an_unsaved_address() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let address_repo = &ctx.repos.address_repository;

        let saved = address_repo.save(test_address(), "jactor").await?;

        assert!(saved.is_persisted());

        let found = address_repo
            .find_by_id(saved.identity().as_uuid().unwrap())
            .await?
            .expect("saved address should be readable");

        assert_eq!(found.address_line_1, saved.address_line_1);
        assert_eq!(found.city, saved.city);
        assert_eq!(found.audit.created_by(), "jactor");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_save_updates_a_persisted_address() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let address_repo = &ctx.repos.address_repository;

        let mut saved = address_repo.save(test_address(), "jactor").await?;
        saved.city = "New Testington".to_string();

        let updated = address_repo.save(saved.clone(), "turbo").await?;
        let found = address_repo
            .find_by_id(updated.identity().as_uuid().unwrap())
            .await?
            .expect("updated address should be readable");

        assert_eq!(found.city, "New Testington");
        assert_eq!(found.audit.modified_by(), "turbo");
        assert_eq!(found.audit.created_by(), "jactor");
        assert_eq!(found.identity(), saved.identity());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_updating_a_vanished_address_is_fatal() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let address_repo = &ctx.repos.address_repository;

        let ghost = test_address().with_identity(Uuid::now_v7());
        let result = address_repo.save(ghost, "jactor").await;

        assert!(matches!(
            result,
            Err(PersistenceError::UpdateTargetMissing { aggregate: "address", .. })
        ));

        Ok(())
    }
}
