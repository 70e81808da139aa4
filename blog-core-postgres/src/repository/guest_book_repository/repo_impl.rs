use blog_core_api::error::PersistenceResult;
use blog_core_db::models::{GuestBook, GuestBookEntry};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{audit_stamp_from_row, TryFromRow};

/// Repository for guest books and their entries.
pub struct GuestBookRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl GuestBookRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for GuestBook {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(GuestBook {
            audit: audit_stamp_from_row(row)?,
            title: row.try_get("title")?,
            user_id: row.try_get("user_id")?,
        })
    }
}

impl TryFromRow<PgRow> for GuestBookEntry {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(GuestBookEntry {
            audit: audit_stamp_from_row(row)?,
            guest_book_id: row.try_get("guest_book_id")?,
            guest_name: row.try_get("guest_name")?,
            entry: row.try_get("entry")?,
        })
    }
}
