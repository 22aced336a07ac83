use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{InvalidReason, Person, RegisterResult, RegistrationOutcome, VoterId};
use super::eligibility::{screen_age, screen_identity, EligibilityConfig};
use super::roll::{InMemoryVoterRoll, RollError, VoterRoll};

/// Registry composing the eligibility rules with a voter roll.
///
/// Each instance owns its roll; separate elections or tests build separate
/// registries.
pub struct Registry<R = InMemoryVoterRoll> {
    roll: Arc<R>,
    config: EligibilityConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(EligibilityConfig::default())
    }

    pub fn with_config(config: EligibilityConfig) -> Self {
        Self::with_roll(Arc::new(InMemoryVoterRoll::default()), config)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Registry<R>
where
    R: VoterRoll + 'static,
{
    pub fn with_roll(roll: Arc<R>, config: EligibilityConfig) -> Self {
        Self { roll, config }
    }

    pub fn eligibility(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Screen `person` and record their id when eligible.
    pub fn register_voter(&self, person: Option<&Person>) -> RegisterResult {
        self.register(person).result()
    }

    /// Same as [`Registry::register_voter`], keeping the reason behind an
    /// invalid outcome.
    pub fn register(&self, person: Option<&Person>) -> RegistrationOutcome {
        let outcome = self.decide(person);

        match outcome {
            RegistrationOutcome::Valid => {
                if let Some(person) = person {
                    info!(voter_id = %person.id, "voter registered");
                }
            }
            rejected => {
                debug!(
                    voter_id = person.map(|p| p.id.0),
                    result = rejected.result().label(),
                    reason = %rejected.summary(),
                    "registration rejected"
                );
            }
        }

        outcome
    }

    fn decide(&self, person: Option<&Person>) -> RegistrationOutcome {
        let person = match screen_identity(person) {
            Ok(person) => person,
            Err(outcome) => return outcome,
        };

        match self.roll.contains(&person.id) {
            Ok(true) => return RegistrationOutcome::Duplicated,
            Ok(false) => {}
            Err(err) => return roll_unavailable(person.id, err),
        }

        if let Some(reason) = screen_age(person, &self.config) {
            return RegistrationOutcome::Invalid(reason);
        }

        // A concurrent caller may have claimed the id since the lookup above.
        match self.roll.claim(person.id) {
            Ok(true) => RegistrationOutcome::Valid,
            Ok(false) => RegistrationOutcome::Duplicated,
            Err(err) => roll_unavailable(person.id, err),
        }
    }

    pub fn is_registered(&self, id: VoterId) -> Result<bool, RollError> {
        self.roll.contains(&id)
    }

    pub fn registered_count(&self) -> Result<usize, RollError> {
        self.roll.len()
    }

    /// Forget every registered id.
    pub fn clear(&self) {
        match self.roll.clear() {
            Ok(()) => info!("voter roll cleared"),
            Err(err) => warn!(error = %err, "failed to clear voter roll"),
        }
    }
}

fn roll_unavailable(id: VoterId, err: RollError) -> RegistrationOutcome {
    warn!(voter_id = %id, error = %err, "voter roll lookup failed");
    RegistrationOutcome::Invalid(InvalidReason::RollUnavailable)
}
