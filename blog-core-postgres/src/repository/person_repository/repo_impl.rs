use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Person;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{audit_stamp_from_row, TryFromRow};

pub struct PersonRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl PersonRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for Person {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(Person {
            audit: audit_stamp_from_row(row)?,
            address_id: row.try_get("address_id")?,
            locale: row.try_get("locale")?,
            first_name: row.try_get("first_name")?,
            surname: row.try_get("surname")?,
            description: row.try_get("description")?,
        })
    }
}
