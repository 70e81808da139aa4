use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::persistable::Persistable;

/// Generic repository trait for finding a record by its identity.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement the Persistable trait
#[async_trait]
pub trait FindById<DB: Database, T: Persistable>: Send + Sync {
    /// Find a record by its unique identifier.
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found record
    /// * `Ok(None)` - If no row carries the identifier
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<T>>;
}
