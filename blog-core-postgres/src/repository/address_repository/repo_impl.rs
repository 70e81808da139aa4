use blog_core_api::error::PersistenceResult;
use blog_core_db::models::Address;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{audit_stamp_from_row, TryFromRow};

pub struct AddressRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AddressRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for Address {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(Address {
            audit: audit_stamp_from_row(row)?,
            address_line_1: row.try_get("address_line_1")?,
            address_line_2: row.try_get("address_line_2")?,
            address_line_3: row.try_get("address_line_3")?,
            city: row.try_get("city")?,
            country: row.try_get("country")?,
            zip_code: row.try_get("zip_code")?,
        })
    }
}
