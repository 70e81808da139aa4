use std::sync::Arc;

use blog_core_api::dto::{AddressDto, PersonDto};
use blog_core_api::error::PersistenceResult;
use blog_core_db::models::{Address, Persistable, Person};
use blog_core_db::relation::SingleRelationCache;
use blog_core_db::repository::find_by_id::FindById;
use blog_core_db::repository::save::Save;
use uuid::Uuid;

use crate::repository::{AddressRepositoryImpl, PersonRepositoryImpl};

use super::require_found;

/// Request-scoped orchestration for persons and their addresses.
pub struct PersonService {
    address_repository: Arc<AddressRepositoryImpl>,
    person_repository: Arc<PersonRepositoryImpl>,
    address_cache: SingleRelationCache<Address>,
}

impl PersonService {
    pub fn new(
        address_repository: Arc<AddressRepositoryImpl>,
        person_repository: Arc<PersonRepositoryImpl>,
    ) -> Self {
        let cache_repository = address_repository.clone();
        let address_cache = SingleRelationCache::new(move |id| {
            let repository = cache_repository.clone();
            async move { repository.find_by_id(id).await }
        });

        PersonService {
            address_repository,
            person_repository,
            address_cache,
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<PersonDto>> {
        let person = self.person_repository.find_by_id(id).await?;

        Ok(person.map(|person| person.to_dto()))
    }

    /// Find a person and embed its address.
    pub async fn find_with_address(&mut self, id: Uuid) -> PersistenceResult<Option<PersonDto>> {
        let Some(person) = self.person_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut dto = person.to_dto();
        if let Some(address_id) = person.address_id {
            let resolved = self.address_cache.fetch_related_instance(Some(address_id)).await?;
            let address = require_found("address", address_id, resolved)?;
            dto.address = Some(address.to_dto());
        }

        Ok(Some(dto))
    }

    /// Persist the address first, then the person referencing it.
    pub async fn create_person(
        &self,
        person: &PersonDto,
        address: &AddressDto,
        actor: &str,
    ) -> PersistenceResult<PersonDto> {
        let address = Address::from_dto(address).without_identity();
        let saved_address = self.address_repository.save(address, actor).await?;

        let mut person = Person::from_dto(person).without_identity();
        person.address_id = saved_address.identity().as_uuid();
        let saved_person = self.person_repository.save(person, actor).await?;

        let mut dto = saved_person.to_dto();
        dto.address = Some(saved_address.to_dto());

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::PersonService;
    use crate::test_helper::{setup_test_context, test_address, test_person};

    #[tokio::test]
    #[ignore = "requires a running postgres instance"]
    async fn test_create_person_wires_the_address_before_the_person(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let mut service = PersonService::new(
            ctx.repos.address_repository.clone(),
            ctx.repos.person_repository.clone(),
        );

        let created = service
            .create_person(&test_person(None).to_dto(), &test_address().to_dto(), "jactor")
            .await?;

        let id = created.persistent.id.ok_or("person was not persisted")?;
        assert!(created.address_id.is_some());

        let found = service.find_with_address(id).await?.ok_or("person not found")?;
        let address = found.address.ok_or("address not embedded")?;
        assert_eq!(address.persistent.id, created.address_id);

        Ok(())
    }
}
