pub mod blog_service;
pub mod guest_book_service;
pub mod person_service;
pub mod user_service;

pub use blog_service::BlogService;
pub use guest_book_service::GuestBookService;
pub use person_service::PersonService;
pub use user_service::UserService;

use blog_core_api::error::{PersistenceError, PersistenceResult};
use uuid::Uuid;

/// A saved foreign key must resolve to a record; a miss is a broken relation,
/// not an empty result.
pub(crate) fn require_found<T>(
    relation: &'static str,
    id: Uuid,
    found: Option<T>,
) -> PersistenceResult<T> {
    found.ok_or(PersistenceError::MissingRelation { relation, id })
}
