pub mod address;
pub mod audit_stamp;
pub mod blog;
pub mod guest_book;
pub mod identity;
pub mod persistable;
pub mod person;
pub mod user;

// Re-exports
pub use address::*;
pub use audit_stamp::*;
pub use blog::*;
pub use guest_book::*;
pub use identity::*;
pub use persistable::*;
pub use person::*;
pub use user::*;
