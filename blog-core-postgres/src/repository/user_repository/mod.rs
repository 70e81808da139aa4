pub mod contains;
pub mod find_by_id;
pub mod find_by_person_id;
pub mod find_by_username;
pub mod find_usernames;
pub mod repo_impl;
pub mod save;

pub use repo_impl::UserRepositoryImpl;
