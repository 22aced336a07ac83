//! Voter registration: eligibility screening over an owned roll of registered ids.

pub mod domain;
pub mod eligibility;
pub mod roll;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Gender, InvalidReason, Person, RegisterResult, RegistrationOutcome, VoterId};
pub use eligibility::{EligibilityConfig, MAX_AGE, MIN_AGE, MIN_VOTING_AGE};
pub use roll::{InMemoryVoterRoll, RollError, VoterRoll};
pub use service::Registry;
