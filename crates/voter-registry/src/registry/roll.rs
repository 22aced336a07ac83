use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::domain::VoterId;

/// Storage abstraction for the set of registered identifiers.
///
/// Implementations must make [`VoterRoll::claim`] atomic: two concurrent
/// claims for the same id may not both return `true`.
pub trait VoterRoll: Send + Sync {
    fn contains(&self, id: &VoterId) -> Result<bool, RollError>;
    /// Inserts `id` if absent, returning whether this call inserted it.
    fn claim(&self, id: VoterId) -> Result<bool, RollError>;
    fn len(&self) -> Result<usize, RollError>;
    fn clear(&self) -> Result<(), RollError>;

    fn is_empty(&self) -> Result<bool, RollError> {
        Ok(self.len()? == 0)
    }
}

/// Error enumeration for roll failures.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    #[error("voter roll unavailable: {0}")]
    Unavailable(String),
}

/// Process-local roll backed by a mutex-guarded hash set.
#[derive(Debug, Default)]
pub struct InMemoryVoterRoll {
    pub(super) ids: Mutex<HashSet<VoterId>>,
}

impl InMemoryVoterRoll {
    // Every mutation is a single insert or clear, so a poisoned set is still consistent.
    fn ids(&self) -> MutexGuard<'_, HashSet<VoterId>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VoterRoll for InMemoryVoterRoll {
    fn contains(&self, id: &VoterId) -> Result<bool, RollError> {
        Ok(self.ids().contains(id))
    }

    fn claim(&self, id: VoterId) -> Result<bool, RollError> {
        Ok(self.ids().insert(id))
    }

    fn len(&self) -> Result<usize, RollError> {
        Ok(self.ids().len())
    }

    fn clear(&self) -> Result<(), RollError> {
        self.ids().clear();
        Ok(())
    }
}
