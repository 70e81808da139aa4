pub mod models;
pub mod relation;
pub mod repository;

pub use models::*;
pub use relation::*;
