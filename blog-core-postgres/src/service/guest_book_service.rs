use std::sync::Arc;

use blog_core_api::dto::{GuestBookDto, GuestBookEntryDto};
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::{GuestBook, GuestBookEntry, Identity};
use blog_core_db::relation::MultiRelationCache;
use blog_core_db::repository::find_by_id::FindById;
use blog_core_db::repository::save::Save;
use uuid::Uuid;

use crate::repository::GuestBookRepositoryImpl;

/// Request-scoped orchestration for guest books and their entries.
pub struct GuestBookService {
    guest_book_repository: Arc<GuestBookRepositoryImpl>,
    entries: MultiRelationCache<GuestBookEntry>,
}

impl GuestBookService {
    pub fn new(guest_book_repository: Arc<GuestBookRepositoryImpl>) -> Self {
        let entry_repository = guest_book_repository.clone();
        let entries = MultiRelationCache::new(move |guest_book_id| {
            let repository = entry_repository.clone();
            async move { repository.find_entries_by_guest_book_id(guest_book_id).await }
        });

        GuestBookService {
            guest_book_repository,
            entries,
        }
    }

    pub async fn find_guest_book_by_id(&self, id: Uuid) -> PersistenceResult<Option<GuestBookDto>> {
        let guest_book = self.guest_book_repository.find_by_id(id).await?;

        Ok(guest_book.map(|guest_book| guest_book.to_dto()))
    }

    pub async fn find_guest_book_by_user_id(
        &self,
        user_id: Uuid,
    ) -> PersistenceResult<Option<GuestBookDto>> {
        let guest_book = self.guest_book_repository.find_by_user_id(user_id).await?;

        Ok(guest_book.map(|guest_book| guest_book.to_dto()))
    }

    pub async fn save_guest_book(
        &self,
        dto: &GuestBookDto,
        actor: &str,
    ) -> PersistenceResult<GuestBookDto> {
        let saved = self
            .guest_book_repository
            .save(GuestBook::from_dto(dto), actor)
            .await?;

        Ok(saved.to_dto())
    }

    pub async fn save_entry(
        &self,
        dto: &GuestBookEntryDto,
        actor: &str,
    ) -> PersistenceResult<GuestBookEntryDto> {
        let saved = self
            .guest_book_repository
            .save(GuestBookEntry::from_dto(dto), actor)
            .await?;

        Ok(saved.to_dto())
    }

    /// The current entries of a guest book. An unsaved guest book has none.
    pub async fn entries_for(&self, guest_book: Identity) -> PersistenceResult<Vec<GuestBookEntryDto>> {
        let entries = self.entries.fetch_relations_to(guest_book).await?;

        Ok(entries.iter().map(GuestBookEntry::to_dto).collect())
    }
}
