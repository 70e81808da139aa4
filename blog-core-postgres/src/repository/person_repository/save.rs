use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{Persistable, Person};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn insert_impl(&self, id: Uuid, person: Person) -> PersistenceResult<Person> {
        debug!(%id, "inserting person");

        sqlx::query(
            r#"
            INSERT INTO person (id, created_by, creation_time, updated_by, updated_time,
                                address_id, locale, first_name, surname, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(id)
        .bind(person.audit.created_by())
        .bind(person.audit.time_of_creation())
        .bind(person.audit.modified_by())
        .bind(person.audit.time_of_modification())
        .bind(person.address_id)
        .bind(person.locale.as_deref())
        .bind(person.first_name.as_deref())
        .bind(person.surname.as_str())
        .bind(person.description.as_deref())
        .execute(&*self.pool)
        .await?;

        Ok(person.with_identity(id))
    }

    pub(super) async fn update_impl(&self, id: Uuid, person: Person) -> PersistenceResult<Person> {
        debug!(%id, "updating person");

        let result = sqlx::query(
            r#"
            UPDATE person
            SET updated_by = $2, updated_time = $3, address_id = $4, locale = $5,
                first_name = $6, surname = $7, description = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(person.audit.modified_by())
        .bind(person.audit.time_of_modification())
        .bind(person.address_id)
        .bind(person.locale.as_deref())
        .bind(person.first_name.as_deref())
        .bind(person.surname.as_str())
        .bind(person.description.as_deref())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "person",
                id,
            });
        }

        Ok(person)
    }
}

#[async_trait]
impl Save<Postgres, Person> for PersonRepositoryImpl {
    async fn insert(&self, id: Uuid, item: Person) -> PersistenceResult<Person> {
        Self::insert_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: Person) -> PersistenceResult<Person> {
        Self::update_impl(self, id, item).await
    }
}
