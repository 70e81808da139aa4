pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;

#[cfg(test)]
pub mod test_helper;
