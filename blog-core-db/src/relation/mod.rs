pub mod multi;
pub mod single;

// Re-exports
pub use multi::*;
pub use single::*;
