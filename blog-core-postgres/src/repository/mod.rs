pub mod address_repository;
pub mod blog_repository;
pub mod guest_book_repository;
pub mod person_repository;
pub mod user_repository;

// Re-exports
pub use address_repository::AddressRepositoryImpl;
pub use blog_repository::BlogRepositoryImpl;
pub use guest_book_repository::GuestBookRepositoryImpl;
pub use person_repository::PersonRepositoryImpl;
pub use user_repository::UserRepositoryImpl;
