use std::future::Future;
use std::pin::Pin;

use blog_core_api::error::PersistenceResult;
use uuid::Uuid;

use crate::models::identity::Identity;

type FetchRelations<T> =
    Box<dyn Fn(Uuid) -> Pin<Box<dyn Future<Output = PersistenceResult<Vec<T>>> + Send>> + Send + Sync>;

/// Resolves all dependents of an owner record.
///
/// Unlike [`super::SingleRelationCache`] nothing is memoized: the set of
/// dependents can grow between calls, so there is no stable single-value key
/// to cache by. Every invocation with a saved owner is a fresh fetch.
///
/// The fetch closure is keyed by the owner's saved id. An unsaved owner has
/// no id for dependent rows to reference, so resolution short-circuits to an
/// empty list instead of invoking the closure; callers that want an
/// unconditional fetch must persist the owner first.
pub struct MultiRelationCache<T> {
    fetch_relations: FetchRelations<T>,
}

impl<T> MultiRelationCache<T> {
    pub fn new<F, Fut>(fetch_relations: F) -> Self
    where
        F: Fn(Uuid) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = PersistenceResult<Vec<T>>> + Send + 'static,
    {
        MultiRelationCache {
            fetch_relations: Box::new(move |id| Box::pin(fetch_relations(id))),
        }
    }

    /// Fetch the current dependents of `owner`. An unsaved owner has no
    /// dependents, so the fetch closure is skipped.
    pub async fn fetch_relations_to(&self, owner: Identity) -> PersistenceResult<Vec<T>> {
        match owner.as_uuid() {
            Some(id) => (self.fetch_relations)(id).await,
            None => Ok(Vec::new()),
        }
    }
}
