use std::future::Future;
use std::pin::Pin;

use blog_core_api::error::PersistenceResult;
use tracing::debug;
use uuid::Uuid;

use crate::models::identity::Identity;
use crate::models::persistable::Persistable;

type FetchRelation<T> =
    Box<dyn Fn(Uuid) -> Pin<Box<dyn Future<Output = PersistenceResult<Option<T>>> + Send>> + Send + Sync>;

/// Memoizes the resolution of one foreign-key reference.
///
/// The cache is bound to a single aggregate-record instance and accessed
/// through `&mut self`; it is not meant to be shared across threads. Each
/// distinct id is charged exactly one invocation of the fetch closure, and a
/// request for a different id replaces the cached value instead of growing a
/// map.
pub struct SingleRelationCache<T> {
    fetch_relation: FetchRelation<T>,
    cached: Option<T>,
}

impl<T: Persistable + Clone> SingleRelationCache<T> {
    pub fn new<F, Fut>(fetch_relation: F) -> Self
    where
        F: Fn(Uuid) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = PersistenceResult<Option<T>>> + Send + 'static,
    {
        SingleRelationCache {
            fetch_relation: Box::new(move |id| Box::pin(fetch_relation(id))),
            cached: None,
        }
    }

    /// Resolve the reference behind `id`.
    ///
    /// An absent id resolves to `None` without touching the store. A cached
    /// record is returned as long as its saved identity matches the requested
    /// id; otherwise the fetch closure runs and its result replaces the
    /// cache. An absent fetch result is handed back untouched, deciding
    /// whether that breaks an invariant is up to the caller.
    pub async fn fetch_related_instance(&mut self, id: Option<Uuid>) -> PersistenceResult<Option<T>> {
        let Some(id) = id else {
            return Ok(None);
        };

        if let Some(cached) = &self.cached {
            if cached.identity() == Identity::Saved(id) {
                return Ok(Some(cached.clone()));
            }
        }

        debug!(%id, "resolving relation");
        let fetched = (self.fetch_relation)(id).await?;
        self.cached = fetched.clone();

        Ok(fetched)
    }
}
