use blog_core_api::dto::{BlogDto, BlogEntryDto};
use blog_core_api::error::{PersistenceError, PersistenceResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit_stamp::AuditStamp;
use super::persistable::Persistable;

/// Internal record for a blog owned by a [`super::User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub audit: AuditStamp,
    pub created: NaiveDate,
    pub title: String,
    pub user_id: Option<Uuid>,
}

impl Persistable for Blog {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        Blog {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.user_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a blog must belong to a user".to_string(),
            )),
        }
    }
}

impl Blog {
    pub fn to_dto(&self) -> BlogDto {
        BlogDto {
            persistent: self.audit.to_dto(),
            created: self.created,
            title: self.title.clone(),
            user_id: self.user_id,
            user: None,
        }
    }

    pub fn from_dto(dto: &BlogDto) -> Self {
        Blog {
            audit: AuditStamp::from_dto(&dto.persistent),
            created: dto.created,
            title: dto.title.clone(),
            user_id: dto
                .user_id
                .or_else(|| dto.user.as_ref().and_then(|user| user.persistent.id)),
        }
    }
}

/// Internal record for an entry in a [`Blog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub audit: AuditStamp,
    pub blog_id: Option<Uuid>,
    pub creator_name: String,
    pub entry: String,
}

impl Persistable for BlogEntry {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        BlogEntry {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.blog_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a blog entry must belong to a blog".to_string(),
            )),
        }
    }
}

impl BlogEntry {
    pub fn to_dto(&self) -> BlogEntryDto {
        BlogEntryDto {
            persistent: self.audit.to_dto(),
            blog_id: self.blog_id,
            creator_name: self.creator_name.clone(),
            entry: self.entry.clone(),
        }
    }

    pub fn from_dto(dto: &BlogEntryDto) -> Self {
        BlogEntry {
            audit: AuditStamp::from_dto(&dto.persistent),
            blog_id: dto.blog_id,
            creator_name: dto.creator_name.clone(),
            entry: dto.entry.clone(),
        }
    }
}
