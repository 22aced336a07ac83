use std::sync::Arc;

use crate::registry::domain::{Gender, Person, VoterId};
use crate::registry::eligibility::EligibilityConfig;
use crate::registry::roll::{InMemoryVoterRoll, RollError, VoterRoll};
use crate::registry::Registry;

pub(super) fn adult(id: i64) -> Person {
    Person::new("Ana", id, 30, Gender::Female, true)
}

pub(super) fn person(id: i64, age: i32, alive: bool) -> Person {
    Person::new("X", id, age, Gender::Male, alive)
}

pub(super) fn build_registry() -> (Registry, Arc<InMemoryVoterRoll>) {
    let roll = Arc::new(InMemoryVoterRoll::default());
    let registry = Registry::with_roll(roll.clone(), EligibilityConfig::default());
    (registry, roll)
}

/// Roll that fails every call, to exercise the no-error-channel path.
pub(super) struct UnavailableRoll;

impl VoterRoll for UnavailableRoll {
    fn contains(&self, _id: &VoterId) -> Result<bool, RollError> {
        Err(RollError::Unavailable("database offline".to_string()))
    }

    fn claim(&self, _id: VoterId) -> Result<bool, RollError> {
        Err(RollError::Unavailable("database offline".to_string()))
    }

    fn len(&self) -> Result<usize, RollError> {
        Err(RollError::Unavailable("database offline".to_string()))
    }

    fn clear(&self) -> Result<(), RollError> {
        Err(RollError::Unavailable("database offline".to_string()))
    }
}

/// Roll whose lookups always miss, so only `claim` can report a duplicate.
#[derive(Default)]
pub(super) struct StaleLookupRoll {
    inner: InMemoryVoterRoll,
}

impl VoterRoll for StaleLookupRoll {
    fn contains(&self, _id: &VoterId) -> Result<bool, RollError> {
        Ok(false)
    }

    fn claim(&self, id: VoterId) -> Result<bool, RollError> {
        self.inner.claim(id)
    }

    fn len(&self) -> Result<usize, RollError> {
        self.inner.len()
    }

    fn clear(&self) -> Result<(), RollError> {
        self.inner.clear()
    }
}
