pub mod find_blogs_by_title;
pub mod find_blogs_by_user_id;
pub mod find_by_id;
pub mod find_entries_by_blog_id;
pub mod find_entry_by_id;
pub mod repo_impl;
pub mod save;
pub mod save_entry;

pub use repo_impl::BlogRepositoryImpl;
