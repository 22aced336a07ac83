use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered voters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(pub i64);

impl VoterId {
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Informational only; never consulted when deciding eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Flat person record supplied by the caller for a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub id: VoterId,
    pub age: i32,
    pub gender: Gender,
    pub alive: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, id: i64, age: i32, gender: Gender, alive: bool) -> Self {
        Self {
            name: name.into(),
            id: VoterId(id),
            age,
            gender,
            alive,
        }
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterResult {
    Valid,
    Invalid,
    Dead,
    Duplicated,
}

impl RegisterResult {
    pub const fn label(self) -> &'static str {
        match self {
            RegisterResult::Valid => "valid",
            RegisterResult::Invalid => "invalid",
            RegisterResult::Dead => "dead",
            RegisterResult::Duplicated => "duplicated",
        }
    }
}

impl fmt::Display for RegisterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an attempt was folded into [`RegisterResult::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    MissingPerson,
    NonPositiveId,
    AgeOutOfRange { age: i32 },
    Underage { age: i32, minimum: i32 },
    RollUnavailable,
}

impl InvalidReason {
    pub fn summary(&self) -> String {
        match self {
            InvalidReason::MissingPerson => "no person supplied".to_string(),
            InvalidReason::NonPositiveId => "identifier must be positive".to_string(),
            InvalidReason::AgeOutOfRange { age } => format!("age {age} outside plausible range"),
            InvalidReason::Underage { age, minimum } => {
                format!("age {age} below voting age {minimum}")
            }
            InvalidReason::RollUnavailable => "voter roll unavailable".to_string(),
        }
    }
}

/// Detailed decision trail for a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    Valid,
    Invalid(InvalidReason),
    Dead,
    Duplicated,
}

impl RegistrationOutcome {
    pub const fn result(&self) -> RegisterResult {
        match self {
            RegistrationOutcome::Valid => RegisterResult::Valid,
            RegistrationOutcome::Invalid(_) => RegisterResult::Invalid,
            RegistrationOutcome::Dead => RegisterResult::Dead,
            RegistrationOutcome::Duplicated => RegisterResult::Duplicated,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RegistrationOutcome::Valid => "registration accepted".to_string(),
            RegistrationOutcome::Invalid(reason) => format!("invalid: {}", reason.summary()),
            RegistrationOutcome::Dead => "person is deceased".to_string(),
            RegistrationOutcome::Duplicated => "identifier already registered".to_string(),
        }
    }
}
