use std::sync::Arc;

use blog_core_api::dto::UserDto;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use blog_core_db::models::{Address, Person, Persistable, User};
use blog_core_db::relation::SingleRelationCache;
use blog_core_db::repository::find_by_id::FindById;
use blog_core_db::repository::save::Save;
use uuid::Uuid;

use crate::repository::{AddressRepositoryImpl, PersonRepositoryImpl, UserRepositoryImpl};

use super::require_found;

/// Request-scoped orchestration for user accounts.
///
/// The relation caches are bound to this instance, so a service lives for one
/// request and is dropped with it.
pub struct UserService {
    user_repository: Arc<UserRepositoryImpl>,
    person_cache: SingleRelationCache<Person>,
    address_cache: SingleRelationCache<Address>,
}

impl UserService {
    pub fn new(
        address_repository: Arc<AddressRepositoryImpl>,
        person_repository: Arc<PersonRepositoryImpl>,
        user_repository: Arc<UserRepositoryImpl>,
    ) -> Self {
        let person_cache = SingleRelationCache::new(move |id| {
            let repository = person_repository.clone();
            async move { repository.find_by_id(id).await }
        });
        let address_cache = SingleRelationCache::new(move |id| {
            let repository = address_repository.clone();
            async move { repository.find_by_id(id).await }
        });

        UserService {
            user_repository,
            person_cache,
            address_cache,
        }
    }

    pub async fn find(&self, username: &str) -> PersistenceResult<Option<UserDto>> {
        let user = self.user_repository.find_by_username(username).await?;

        Ok(user.map(|user| user.to_dto()))
    }

    pub async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<UserDto>> {
        let user = self.user_repository.find_by_id(id).await?;

        Ok(user.map(|user| user.to_dto()))
    }

    pub async fn is_already_persisted(&self, username: &str) -> PersistenceResult<bool> {
        self.user_repository.contains(username).await
    }

    pub async fn create(&self, dto: &UserDto, actor: &str) -> PersistenceResult<UserDto> {
        let user = User::from_dto(dto).without_identity();
        let saved = self.user_repository.save(user, actor).await?;

        Ok(saved.to_dto())
    }

    pub async fn update(&self, dto: &UserDto, actor: &str) -> PersistenceResult<UserDto> {
        let user = User::from_dto(dto);
        if !user.is_persisted() {
            return Err(PersistenceError::Validation(
                "cannot update a user that was never saved".to_string(),
            ));
        }

        let saved = self.user_repository.save(user, actor).await?;

        Ok(saved.to_dto())
    }

    /// Find a user and embed its person, with the person's address embedded in
    /// turn. A saved person or address id that resolves to nothing is a broken
    /// relation.
    pub async fn find_with_person(&mut self, username: &str) -> PersistenceResult<Option<UserDto>> {
        let Some(user) = self.user_repository.find_by_username(username).await? else {
            return Ok(None);
        };

        let mut dto = user.to_dto();
        if let Some(person_id) = user.person_id {
            let resolved = self.person_cache.fetch_related_instance(Some(person_id)).await?;
            let person = require_found("person", person_id, resolved)?;

            let mut person_dto = person.to_dto();
            if let Some(address_id) = person.address_id {
                let resolved = self.address_cache.fetch_related_instance(Some(address_id)).await?;
                let address = require_found("address", address_id, resolved)?;
                person_dto.address = Some(address.to_dto());
            }

            dto.person = Some(person_dto);
        }

        Ok(Some(dto))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{persist_user_fixture, setup_test_context};
    use crate::service::UserService;

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_find_with_person_embeds_the_person_and_its_address(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        persist_user_fixture(&ctx.repos, "embedded").await?;

        let mut service = UserService::new(
            ctx.repos.address_repository.clone(),
            ctx.repos.person_repository.clone(),
            ctx.repos.user_repository.clone(),
        );

        let user = service
            .find_with_person("embedded")
            .await?
            .ok_or("user not found")?;

        let person = user.person.ok_or("person not embedded")?;
        assert_eq!(person.surname, "Black");

        let address = person.address.ok_or("address not embedded")?;
        assert_eq!(address.address_line_1, "1001 Test Boulevard");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_an_unknown_username_resolves_to_nothing(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;

        let mut service = UserService::new(
            ctx.repos.address_repository.clone(),
            ctx.repos.person_repository.clone(),
            ctx.repos.user_repository.clone(),
        );

        assert!(service.find_with_person("no-such-user").await?.is_none());

        Ok(())
    }
}
