use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two-state identity of a storable record: either it has never been written,
/// or it exists in the store under a known key. Modeled as a tagged variant so
/// the insert-vs-update decision is never made on a bare nullable id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    #[default]
    Unsaved,
    Saved(Uuid),
}

impl Identity {
    pub fn from_option(id: Option<Uuid>) -> Self {
        match id {
            Some(id) => Identity::Saved(id),
            None => Identity::Unsaved,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Identity::Saved(id) => Some(*id),
            Identity::Unsaved => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Identity::Saved(_))
    }
}
