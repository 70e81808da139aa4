use blog_core_api::error::PersistenceResult;
use blog_core_db::models::{Blog, BlogEntry};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{audit_stamp_from_row, TryFromRow};

/// Repository for blogs and their entries.
pub struct BlogRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl BlogRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for Blog {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(Blog {
            audit: audit_stamp_from_row(row)?,
            created: row.try_get("created")?,
            title: row.try_get("title")?,
            user_id: row.try_get("user_id")?,
        })
    }
}

impl TryFromRow<PgRow> for BlogEntry {
    fn try_from_row(row: &PgRow) -> PersistenceResult<Self> {
        Ok(BlogEntry {
            audit: audit_stamp_from_row(row)?,
            blog_id: row.try_get("blog_id")?,
            creator_name: row.try_get("creator_name")?,
            entry: row.try_get("entry")?,
        })
    }
}
