pub mod find_by_id;
pub mod save;

// Re-exports
pub use find_by_id::*;
pub use save::*;
