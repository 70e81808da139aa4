use blog_core_api::dto::PersonDto;
use blog_core_api::error::{PersistenceError, PersistenceResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit_stamp::AuditStamp;
use super::persistable::Persistable;

/// Internal record for a person. Must reference an [`super::Address`] before
/// it can be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub audit: AuditStamp,
    pub address_id: Option<Uuid>,
    pub locale: Option<String>,
    pub first_name: Option<String>,
    pub surname: String,
    pub description: Option<String>,
}

impl Persistable for Person {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        Person {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.address_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a person must reference an address".to_string(),
            )),
        }
    }
}

impl Person {
    pub fn to_dto(&self) -> PersonDto {
        PersonDto {
            persistent: self.audit.to_dto(),
            address_id: self.address_id,
            address: None,
            locale: self.locale.clone(),
            first_name: self.first_name.clone(),
            surname: self.surname.clone(),
            description: self.description.clone(),
        }
    }

    pub fn from_dto(dto: &PersonDto) -> Self {
        Person {
            audit: AuditStamp::from_dto(&dto.persistent),
            address_id: dto
                .address_id
                .or_else(|| dto.address.as_ref().and_then(|address| address.persistent.id)),
            locale: dto.locale.clone(),
            first_name: dto.first_name.clone(),
            surname: dto.surname.clone(),
            description: dto.description.clone(),
        }
    }
}
