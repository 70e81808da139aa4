use blog_core_api::error::PersistenceResult;
use blog_core_db::models::AuditStamp;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Decode a full row into a domain record.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> PersistenceResult<Self>;
}

/// Decode the audit columns shared by every table.
pub fn audit_stamp_from_row(row: &PgRow) -> PersistenceResult<AuditStamp> {
    Ok(AuditStamp::from_row_parts(
        row.try_get("id")?,
        row.try_get("created_by")?,
        row.try_get("creation_time")?,
        row.try_get("updated_by")?,
        row.try_get("updated_time")?,
    ))
}
