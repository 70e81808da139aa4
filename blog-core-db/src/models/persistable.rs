use blog_core_api::error::PersistenceResult;
use uuid::Uuid;

use super::audit_stamp::AuditStamp;
use super::identity::Identity;

/// Capability of every storable record: carry an [`AuditStamp`] and expose
/// the narrow operations that may change it.
///
/// Implementations provide access to the stamp; the identity and stamping
/// plumbing is written once here so every aggregate behaves the same way.
pub trait Persistable: Sized {
    fn audit(&self) -> &AuditStamp;

    /// Replace the audit stamp through a pure transformation.
    fn map_audit(self, f: impl FnOnce(AuditStamp) -> AuditStamp) -> Self;

    /// Checked before any write. Implementations with mandatory foreign keys
    /// report the ones that are absent.
    fn require_relations(&self) -> PersistenceResult<()> {
        Ok(())
    }

    fn identity(&self) -> Identity {
        self.audit().identity()
    }

    fn is_persisted(&self) -> bool {
        self.identity().is_saved()
    }

    /// Value-equal copy detached from its persisted identity, used when
    /// deep-copying an aggregate before re-insertion.
    fn without_identity(self) -> Self {
        self.map_audit(AuditStamp::without_identity)
    }

    /// Copy with modification metadata advanced to `actor` and now.
    fn stamped_by(self, actor: &str) -> Self {
        self.map_audit(|stamp| stamp.stamped_by(actor))
    }

    /// Copy carrying the identity generated at insert time.
    fn with_identity(self, id: Uuid) -> Self {
        self.map_audit(|stamp| stamp.with_identity(id))
    }
}
