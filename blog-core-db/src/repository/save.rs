use async_trait::async_trait;
use blog_core_api::error::PersistenceResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identity::Identity;
use crate::models::persistable::Persistable;

/// Generic repository trait for writing a record, deciding between insert and
/// update based on its identity.
///
/// Implementations provide the two write statements; the branching itself is
/// written once in [`Save::save`] so every aggregate follows the same rules:
/// required relations are validated before any statement runs, inserts carry
/// a freshly generated time-ordered id, and updates re-stamp the modification
/// metadata while leaving `id`, `created_by` and the creation time alone.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The record type that must implement the Persistable trait
#[async_trait]
pub trait Save<DB: Database, T: Persistable + Send + 'static>: Send + Sync {
    /// Write a new row under the generated `id` and return the record with
    /// that identity attached.
    async fn insert(&self, id: Uuid, item: T) -> PersistenceResult<T>;

    /// Overwrite the mutable columns of the row behind `id`. Zero affected
    /// rows is an update-target-missing failure, not a silent no-op.
    async fn update(&self, id: Uuid, item: T) -> PersistenceResult<T>;

    /// Upsert `item` on behalf of `actor`.
    async fn save(&self, item: T, actor: &str) -> PersistenceResult<T> {
        item.require_relations()?;

        match item.identity() {
            Identity::Unsaved => self.insert(Uuid::now_v7(), item).await,
            Identity::Saved(id) => self.update(id, item.stamped_by(actor)).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit_stamp::AuditStamp;
    use crate::models::blog::Blog;
    use blog_core_api::error::PersistenceError;
    use chrono::NaiveDate;
    use sqlx::Postgres;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        rows: Mutex<HashMap<Uuid, Blog>>,
        inserts: Mutex<usize>,
        updates: Mutex<usize>,
    }

    #[async_trait]
    impl Save<Postgres, Blog> for RecordingRepository {
        async fn insert(&self, id: Uuid, item: Blog) -> PersistenceResult<Blog> {
            let saved = item.with_identity(id);
            self.rows.lock().unwrap().insert(id, saved.clone());
            *self.inserts.lock().unwrap() += 1;
            Ok(saved)
        }

        async fn update(&self, id: Uuid, item: Blog) -> PersistenceResult<Blog> {
            let mut rows = self.rows.lock().unwrap();

            if !rows.contains_key(&id) {
                return Err(PersistenceError::UpdateTargetMissing {
                    aggregate: "blog",
                    id,
                });
            }

            rows.insert(id, item.clone());
            *self.updates.lock().unwrap() += 1;
            Ok(item)
        }
    }

    fn unsaved_blog() -> Blog {
        Blog {
            audit: AuditStamp::new("creator"),
            created: NaiveDate::from_ymd_opt(2024, 4, 17).unwrap(),
            title: "Blah".to_string(),
            user_id: Some(Uuid::now_v7()),
        }
    }

    #[tokio::test]
    async fn test_saving_an_unsaved_record_inserts_and_keeps_creation_metadata() {
        let repository = RecordingRepository::default();
        let blog = unsaved_blog();
        let creation_time = blog.audit.time_of_creation();

        let saved = repository.save(blog, "creator").await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(saved.audit.created_by(), "creator");
        assert_eq!(saved.audit.time_of_creation(), creation_time);
        assert_eq!(*repository.inserts.lock().unwrap(), 1);
        assert_eq!(*repository.updates.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_saving_a_persisted_record_updates_and_re_stamps() {
        let repository = RecordingRepository::default();

        let saved = repository.save(unsaved_blog(), "creator").await.unwrap();
        let id = saved.identity();
        let modified_before = saved.audit.time_of_modification();

        let updated = repository.save(saved, "x").await.unwrap();

        assert_eq!(updated.identity(), id);
        assert_eq!(updated.audit.created_by(), "creator");
        assert_eq!(updated.audit.modified_by(), "x");
        assert!(updated.audit.time_of_modification() > modified_before);
        assert_eq!(*repository.updates.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_required_relation_fails_before_any_write() {
        let repository = RecordingRepository::default();
        let blog = Blog {
            user_id: None,
            ..unsaved_blog()
        };

        let result = repository.save(blog, "creator").await;

        assert!(matches!(result, Err(PersistenceError::Validation(_))));
        assert!(repository.rows.lock().unwrap().is_empty());
        assert_eq!(*repository.inserts.lock().unwrap(), 0);
        assert_eq!(*repository.updates.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_updating_a_vanished_row_is_fatal() {
        let repository = RecordingRepository::default();
        let ghost = unsaved_blog().with_identity(Uuid::now_v7());

        let result = repository.save(ghost, "creator").await;

        assert!(matches!(
            result,
            Err(PersistenceError::UpdateTargetMissing { aggregate: "blog", .. })
        ));
    }

    #[tokio::test]
    async fn test_re_saving_unchanged_fields_only_advances_modification() {
        let repository = RecordingRepository::default();

        let saved = repository.save(unsaved_blog(), "creator").await.unwrap();
        let resaved = repository.save(saved.clone(), "creator").await.unwrap();

        assert_eq!(resaved.identity(), saved.identity());
        assert_eq!(resaved.title, saved.title);
        assert_eq!(resaved.user_id, saved.user_id);
        assert_eq!(resaved.audit.created_by(), saved.audit.created_by());
        assert_eq!(resaved.audit.time_of_creation(), saved.audit.time_of_creation());
        assert!(resaved.audit.time_of_modification() >= saved.audit.time_of_modification());
    }
}
