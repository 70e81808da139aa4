use async_trait::async_trait;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{Persistable, User};
use blog_core_db::repository::save::Save;
use sqlx::Postgres;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn insert_impl(&self, id: Uuid, user: User) -> PersistenceResult<User> {
        debug!(%id, username = %user.username, "inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (id, created_by, creation_time, updated_by, updated_time,
                               person_id, email, user_name, user_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(id)
        .bind(user.audit.created_by())
        .bind(user.audit.time_of_creation())
        .bind(user.audit.modified_by())
        .bind(user.audit.time_of_modification())
        .bind(user.person_id)
        .bind(user.email_address.as_deref())
        .bind(user.username.as_str())
        .bind(user.user_type.to_string())
        .execute(&*self.pool)
        .await?;

        Ok(user.with_identity(id))
    }

    pub(super) async fn update_impl(&self, id: Uuid, user: User) -> PersistenceResult<User> {
        debug!(%id, username = %user.username, "updating user");

        let result = sqlx::query(
            r#"
            UPDATE users
            SET updated_by = $2, updated_time = $3, person_id = $4, email = $5,
                user_name = $6, user_type = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(user.audit.modified_by())
        .bind(user.audit.time_of_modification())
        .bind(user.person_id)
        .bind(user.email_address.as_deref())
        .bind(user.username.as_str())
        .bind(user.user_type.to_string())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::UpdateTargetMissing {
                aggregate: "user",
                id,
            });
        }

        Ok(user)
    }
}

#[async_trait]
impl Save<Postgres, User> for UserRepositoryImpl {
    async fn insert(&self, id: Uuid, item: User) -> PersistenceResult<User> {
        Self::insert_impl(self, id, item).await
    }

    async fn update(&self, id: Uuid, item: User) -> PersistenceResult<User> {
        Self::update_impl(self, id, item).await
    }
}
