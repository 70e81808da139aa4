use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PersistenceError {
    /// A required field or foreign key is absent at save time. Raised before
    /// any write is issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A saved foreign key points at a row that does not exist. Signals a
    /// broken invariant in the store, not bad input.
    #[error("Missing relation: {relation} {id} does not exist")]
    MissingRelation { relation: &'static str, id: Uuid },

    /// An update was attempted against an id that no longer exists.
    #[error("Update target missing: no {aggregate} row with id {id}")]
    UpdateTargetMissing { aggregate: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
