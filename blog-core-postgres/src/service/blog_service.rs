use std::sync::Arc;

use blog_core_api::dto::{BlogDto, BlogEntryDto};
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::{Blog, BlogEntry, Identity};
use blog_core_db::relation::MultiRelationCache;
use blog_core_db::repository::find_by_id::FindById;
use blog_core_db::repository::save::Save;
use uuid::Uuid;

use crate::repository::BlogRepositoryImpl;

/// Request-scoped orchestration for blogs and their entries.
pub struct BlogService {
    blog_repository: Arc<BlogRepositoryImpl>,
    entries: MultiRelationCache<BlogEntry>,
}

impl BlogService {
    pub fn new(blog_repository: Arc<BlogRepositoryImpl>) -> Self {
        let entry_repository = blog_repository.clone();
        let entries = MultiRelationCache::new(move |blog_id| {
            let repository = entry_repository.clone();
            async move { repository.find_entries_by_blog_id(blog_id).await }
        });

        BlogService {
            blog_repository,
            entries,
        }
    }

    pub async fn find_blog_by_id(&self, id: Uuid) -> PersistenceResult<Option<BlogDto>> {
        let blog = self.blog_repository.find_by_id(id).await?;

        Ok(blog.map(|blog| blog.to_dto()))
    }

    pub async fn find_blogs_by_title(&self, title: &str) -> PersistenceResult<Vec<BlogDto>> {
        let blogs = self.blog_repository.find_blogs_by_title(title).await?;

        Ok(blogs.iter().map(Blog::to_dto).collect())
    }

    pub async fn save_blog(&self, dto: &BlogDto, actor: &str) -> PersistenceResult<BlogDto> {
        let saved = self.blog_repository.save(Blog::from_dto(dto), actor).await?;

        Ok(saved.to_dto())
    }

    pub async fn save_entry(&self, dto: &BlogEntryDto, actor: &str) -> PersistenceResult<BlogEntryDto> {
        let saved = self
            .blog_repository
            .save(BlogEntry::from_dto(dto), actor)
            .await?;

        Ok(saved.to_dto())
    }

    /// The current entries of a blog. An unsaved blog has none.
    pub async fn entries_for(&self, blog: Identity) -> PersistenceResult<Vec<BlogEntryDto>> {
        let entries = self.entries.fetch_relations_to(blog).await?;

        Ok(entries.iter().map(BlogEntry::to_dto).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::service::BlogService;
    use crate::test_helper::{persist_blog_fixture, setup_test_context, test_blog_entry};
    use blog_core_db::models::{Identity, Persistable};
    use blog_core_db::repository::save::Save;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_entries_for_reflects_saved_entries(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let blog = persist_blog_fixture(&ctx.repos, "service-blog", "Entries").await?;
        let blog_id = blog.identity().as_uuid();

        let service = BlogService::new(ctx.repos.blog_repository.clone());

        assert!(service.entries_for(Identity::Unsaved).await?.is_empty());

        let entry = test_blog_entry(blog_id, "author", "first words");
        ctx.repos.blog_repository.save(entry, "author").await?;

        let entries = service.entries_for(blog.identity()).await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry, "first words");

        Ok(())
    }
}
