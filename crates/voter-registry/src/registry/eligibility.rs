use serde::{Deserialize, Serialize};

use super::domain::{InvalidReason, Person, RegistrationOutcome};

pub const MIN_AGE: i32 = 0;
pub const MIN_VOTING_AGE: i32 = 18;
pub const MAX_AGE: i32 = 120;

/// Age bounds applied when screening a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub min_age: i32,
    pub min_voting_age: i32,
    pub max_age: i32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            min_voting_age: MIN_VOTING_AGE,
            max_age: MAX_AGE,
        }
    }
}

impl EligibilityConfig {
    pub const fn is_consistent(&self) -> bool {
        self.min_age <= self.min_voting_age && self.min_voting_age <= self.max_age
    }
}

/// Checks that run before the roll is consulted: presence, liveness, id sign.
pub(crate) fn screen_identity(person: Option<&Person>) -> Result<&Person, RegistrationOutcome> {
    let Some(person) = person else {
        return Err(RegistrationOutcome::Invalid(InvalidReason::MissingPerson));
    };

    if !person.alive {
        return Err(RegistrationOutcome::Dead);
    }

    if !person.id.is_positive() {
        return Err(RegistrationOutcome::Invalid(InvalidReason::NonPositiveId));
    }

    Ok(person)
}

/// Checks that run after the duplicate lookup.
pub(crate) fn screen_age(person: &Person, config: &EligibilityConfig) -> Option<InvalidReason> {
    let age = person.age;
    if age < config.min_age || age > config.max_age {
        return Some(InvalidReason::AgeOutOfRange { age });
    }

    if age < config.min_voting_age {
        return Some(InvalidReason::Underage {
            age,
            minimum: config.min_voting_age,
        });
    }

    None
}
