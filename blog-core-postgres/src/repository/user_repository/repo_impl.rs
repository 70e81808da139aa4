use blog_core_api::dto::UnknownUserType;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::User;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{audit_stamp_from_row, TryFromRow};

pub struct UserRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl UserRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for User {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        let user_type: String = row.try_get("user_type")?;
        let user_type = user_type
            .parse()
            .map_err(|err: UnknownUserType| PersistenceError::Database(sqlx::Error::Decode(Box::new(err))))?;

        Ok(User {
            audit: audit_stamp_from_row(row)?,
            person_id: row.try_get("person_id")?,
            email_address: row.try_get("email")?,
            username: row.try_get("user_name")?,
            user_type,
        })
    }
}
