use blog_core_api::dto::PersistentDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::Identity;

/// Creation and modification metadata carried by every storable record.
///
/// Fields are private on purpose: `created_by` and `time_of_creation` are set
/// once by [`AuditStamp::new`] (or rebuilt verbatim from persisted columns)
/// and no operation exists that changes them afterwards. Modification
/// metadata only advances through [`AuditStamp::stamped_by`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStamp {
    identity: Identity,
    created_by: String,
    time_of_creation: DateTime<Utc>,
    modified_by: String,
    time_of_modification: DateTime<Utc>,
}

impl AuditStamp {
    /// Fresh stamp for a record created in memory: unsaved, with creation and
    /// modification metadata both pointing at `actor` and now.
    pub fn new(actor: &str) -> Self {
        let now = Utc::now();
        AuditStamp {
            identity: Identity::Unsaved,
            created_by: actor.to_string(),
            time_of_creation: now,
            modified_by: actor.to_string(),
            time_of_modification: now,
        }
    }

    /// Rebuild a stamp from the audit columns of a persisted row.
    pub fn from_row_parts(
        id: Uuid,
        created_by: String,
        time_of_creation: DateTime<Utc>,
        modified_by: String,
        time_of_modification: DateTime<Utc>,
    ) -> Self {
        AuditStamp {
            identity: Identity::Saved(id),
            created_by,
            time_of_creation,
            modified_by,
            time_of_modification,
        }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn time_of_creation(&self) -> DateTime<Utc> {
        self.time_of_creation
    }

    pub fn modified_by(&self) -> &str {
        &self.modified_by
    }

    pub fn time_of_modification(&self) -> DateTime<Utc> {
        self.time_of_modification
    }

    /// Pure copy with modification metadata advanced to `actor` and now.
    pub fn stamped_by(self, actor: &str) -> Self {
        AuditStamp {
            modified_by: actor.to_string(),
            time_of_modification: Utc::now(),
            ..self
        }
    }

    /// Pure copy detached from its persisted identity. Applying it twice is
    /// the same as applying it once.
    pub fn without_identity(self) -> Self {
        AuditStamp {
            identity: Identity::Unsaved,
            ..self
        }
    }

    /// Attach the identity generated at insert time.
    pub fn with_identity(self, id: Uuid) -> Self {
        AuditStamp {
            identity: Identity::Saved(id),
            ..self
        }
    }

    pub fn to_dto(&self) -> PersistentDto {
        PersistentDto {
            id: self.identity.as_uuid(),
            created_by: self.created_by.clone(),
            time_of_creation: self.time_of_creation,
            modified_by: self.modified_by.clone(),
            time_of_modification: self.time_of_modification,
        }
    }

    pub fn from_dto(dto: &PersistentDto) -> Self {
        AuditStamp {
            identity: Identity::from_option(dto.id),
            created_by: dto.created_by.clone(),
            time_of_creation: dto.time_of_creation,
            modified_by: dto.modified_by.clone(),
            time_of_modification: dto.time_of_modification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamp_is_unsaved_with_creation_equal_to_modification() {
        let stamp = AuditStamp::new("jactor");

        assert_eq!(stamp.identity(), Identity::Unsaved);
        assert_eq!(stamp.created_by(), "jactor");
        assert_eq!(stamp.modified_by(), "jactor");
        assert_eq!(stamp.time_of_creation(), stamp.time_of_modification());
    }

    #[test]
    fn test_stamped_by_advances_only_modification_metadata() {
        let stamp = AuditStamp::new("creator").with_identity(Uuid::now_v7());
        let stamped = stamp.clone().stamped_by("modifier");

        assert_eq!(stamped.identity(), stamp.identity());
        assert_eq!(stamped.created_by(), "creator");
        assert_eq!(stamped.time_of_creation(), stamp.time_of_creation());
        assert_eq!(stamped.modified_by(), "modifier");
        assert!(stamped.time_of_modification() > stamp.time_of_modification());
    }

    #[test]
    fn test_without_identity_is_idempotent() {
        let stamp = AuditStamp::new("creator").with_identity(Uuid::now_v7());
        let detached = stamp.clone().without_identity();

        assert_eq!(detached.identity(), Identity::Unsaved);
        assert_eq!(detached.created_by(), stamp.created_by());
        assert_eq!(detached.modified_by(), stamp.modified_by());
        assert_eq!(detached.time_of_creation(), stamp.time_of_creation());
        assert_eq!(detached.time_of_modification(), stamp.time_of_modification());
        assert_eq!(detached.clone().without_identity(), detached);
    }

    #[test]
    fn test_dto_round_trip_preserves_all_fields() {
        let stamp = AuditStamp::new("creator").with_identity(Uuid::now_v7());

        assert_eq!(AuditStamp::from_dto(&stamp.to_dto()), stamp);
    }
}
