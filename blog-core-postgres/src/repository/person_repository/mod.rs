pub mod find_by_id;
pub mod repo_impl;
pub mod save;

pub use repo_impl::PersonRepositoryImpl;
