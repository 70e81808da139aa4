use blog_core_api::dto::{UserDto, UserType};
use blog_core_api::error::{PersistenceError, PersistenceResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit_stamp::AuditStamp;
use super::persistable::Persistable;

/// Internal record for a user account. Must reference a [`super::Person`]
/// before it can be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub audit: AuditStamp,
    pub person_id: Option<Uuid>,
    pub email_address: Option<String>,
    pub username: String,
    pub user_type: UserType,
}

impl Persistable for User {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        User {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.person_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a user must reference a person".to_string(),
            )),
        }
    }
}

impl User {
    pub fn to_dto(&self) -> UserDto {
        UserDto {
            persistent: self.audit.to_dto(),
            person_id: self.person_id,
            person: None,
            email_address: self.email_address.clone(),
            username: self.username.clone(),
            user_type: self.user_type,
        }
    }

    pub fn from_dto(dto: &UserDto) -> Self {
        User {
            audit: AuditStamp::from_dto(&dto.persistent),
            person_id: dto
                .person_id
                .or_else(|| dto.person.as_ref().and_then(|person| person.persistent.id)),
            email_address: dto.email_address.clone(),
            username: dto.username.clone(),
            user_type: dto.user_type,
        }
    }
}
