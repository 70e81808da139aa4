use blog_core_api::error::PersistenceResult;
use blog_core_db::models::GuestBookEntry;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::GuestBookRepositoryImpl;

impl GuestBookRepositoryImpl {
    pub async fn find_entry_by_id(&self, id: Uuid) -> PersistenceResult<Option<GuestBookEntry>> {
        let row = sqlx::query("SELECT * FROM guest_book_entry WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(GuestBookEntry::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_guest_book_fixture, setup_test_context, test_guest_book_entry};
    use blog_core_db::models::Persistable;
    use blog_core_db::repository::save::Save;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_a_saved_entry_is_found_by_its_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let guest_book = persist_guest_book_fixture(&ctx.repos, "signatures", "Sign in").await?;

        let entry = test_guest_book_entry(guest_book.identity().as_uuid(), "traveller", "passing by");
        let saved = ctx.repos.guest_book_repository.save(entry, "traveller").await?;
        let id = saved.identity().as_uuid().unwrap();

        let found = ctx
            .repos
            .guest_book_repository
            .find_entry_by_id(id)
            .await?
            .ok_or("entry not found")?;

        assert_eq!(found.guest_name, "traveller");
        assert_eq!(found.entry, "passing by");
        assert_eq!(found.guest_book_id, saved.guest_book_id);

        let unknown = ctx
            .repos
            .guest_book_repository
            .find_entry_by_id(Uuid::now_v7())
            .await?;
        assert!(unknown.is_none());

        Ok(())
    }
}
