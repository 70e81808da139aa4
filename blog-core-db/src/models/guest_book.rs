use blog_core_api::dto::{GuestBookDto, GuestBookEntryDto};
use blog_core_api::error::{PersistenceError, PersistenceResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit_stamp::AuditStamp;
use super::persistable::Persistable;

/// Internal record for a guest book owned by a [`super::User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestBook {
    pub audit: AuditStamp,
    pub title: String,
    pub user_id: Option<Uuid>,
}

impl Persistable for GuestBook {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        GuestBook {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.user_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a guest book must belong to a user".to_string(),
            )),
        }
    }
}

impl GuestBook {
    pub fn to_dto(&self) -> GuestBookDto {
        GuestBookDto {
            persistent: self.audit.to_dto(),
            title: self.title.clone(),
            user_id: self.user_id,
        }
    }

    pub fn from_dto(dto: &GuestBookDto) -> Self {
        GuestBook {
            audit: AuditStamp::from_dto(&dto.persistent),
            title: dto.title.clone(),
            user_id: dto.user_id,
        }
    }
}

/// Internal record for an entry written into a [`GuestBook`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestBookEntry {
    pub audit: AuditStamp,
    pub guest_book_id: Option<Uuid>,
    pub guest_name: String,
    pub entry: String,
}

impl Persistable for GuestBookEntry {
    fn audit(&self) -> &AuditStamp {
        &self.audit
    }

    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self {
        GuestBookEntry {
            audit: f(self.audit),
            ..self
        }
    }

    fn require_relations(&self) -> PersistenceResult<()> {
        match self.guest_book_id {
            Some(_) => Ok(()),
            None => Err(PersistenceError::Validation(
                "a guest book entry must belong to a guest book".to_string(),
            )),
        }
    }
}

impl GuestBookEntry {
    pub fn to_dto(&self) -> GuestBookEntryDto {
        GuestBookEntryDto {
            persistent: self.audit.to_dto(),
            guest_book_id: self.guest_book_id,
            guest_name: self.guest_name.clone(),
            entry: self.entry.clone(),
        }
    }

    pub fn from_dto(dto: &GuestBookEntryDto) -> Self {
        GuestBookEntry {
            audit: AuditStamp::from_dto(&dto.persistent),
            guest_book_id: dto.guest_book_id,
            guest_name: dto.guest_name.clone(),
            entry: dto.entry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_book_dto_round_trip_preserves_scalar_fields() {
        let guest_book = GuestBook {
            audit: AuditStamp::new("jactor").with_identity(Uuid::now_v7()),
            title: "home sweet home".to_string(),
            user_id: Some(Uuid::now_v7()),
        };

        assert_eq!(GuestBook::from_dto(&guest_book.to_dto()), guest_book);
    }

    #[test]
    fn test_guest_book_entry_dto_round_trip_preserves_scalar_fields() {
        let entry = GuestBookEntry {
            audit: AuditStamp::new("jactor").with_identity(Uuid::now_v7()),
            guest_book_id: Some(Uuid::now_v7()),
            guest_name: "mrs. black".to_string(),
            entry: "thanks for having us".to_string(),
        };

        assert_eq!(GuestBookEntry::from_dto(&entry.to_dto()), entry);
    }

    #[test]
    fn test_guest_book_without_user_fails_relation_check() {
        let guest_book = GuestBook {
            audit: AuditStamp::new("jactor"),
            title: "orphaned".to_string(),
            user_id: None,
        };

        assert!(matches!(
            guest_book.require_relations(),
            Err(PersistenceError::Validation(_))
        ));
    }
}
