//! Integration scenarios for voter registration through the public registry facade.

use serde_json::json;

use voter_registry::registry::{
    Gender, Person, RegisterResult, Registry, RegistrationOutcome, VoterId,
};

fn from_payload(payload: serde_json::Value) -> Person {
    serde_json::from_value(payload).expect("person payload deserializes")
}

#[test]
fn registration_scenarios_follow_rule_order() {
    let registry = Registry::new();

    let scenarios = [
        (None, RegisterResult::Invalid),
        (
            Some(Person::new("X", 1, 45, Gender::Male, false)),
            RegisterResult::Dead,
        ),
        (
            Some(Person::new("Y", 0, 25, Gender::Female, true)),
            RegisterResult::Invalid,
        ),
        (
            Some(Person::new("Z", 2, 17, Gender::Female, true)),
            RegisterResult::Invalid,
        ),
        (
            Some(Person::new("Ana", 3, 18, Gender::Female, true)),
            RegisterResult::Valid,
        ),
    ];

    for (candidate, expected) in scenarios {
        assert_eq!(
            registry.register_voter(candidate.as_ref()),
            expected,
            "candidate {candidate:?}"
        );
    }

    assert_eq!(registry.registered_count().expect("count"), 1);
    assert!(registry.is_registered(VoterId(3)).expect("lookup"));
    assert!(!registry.is_registered(VoterId(1)).expect("lookup"));
}

#[test]
fn json_payloads_register_and_detect_duplicates() {
    let registry = Registry::new();

    let first = from_payload(json!({
        "name": "A",
        "id": 5,
        "age": 30,
        "gender": "male",
        "alive": true
    }));
    let second = from_payload(json!({
        "name": "B",
        "id": 5,
        "age": 40,
        "gender": "female",
        "alive": true
    }));

    assert_eq!(registry.register_voter(Some(&first)), RegisterResult::Valid);
    assert_eq!(
        registry.register_voter(Some(&second)),
        RegisterResult::Duplicated
    );

    registry.clear();
    assert_eq!(registry.register_voter(Some(&second)), RegisterResult::Valid);
}

#[test]
fn outcomes_serialize_with_snake_case_labels() {
    let labels: Vec<_> = [
        RegisterResult::Valid,
        RegisterResult::Invalid,
        RegisterResult::Dead,
        RegisterResult::Duplicated,
    ]
    .into_iter()
    .map(|result| {
        let encoded = serde_json::to_value(result).expect("result serializes");
        assert_eq!(encoded, json!(result.label()));
        result.to_string()
    })
    .collect();

    assert_eq!(labels, ["valid", "invalid", "dead", "duplicated"]);
}

#[test]
fn detailed_outcome_explains_rejection() {
    let registry = Registry::new();
    let outcome = registry.register(Some(&Person::new("Old", 7, 121, Gender::Other, true)));

    assert_eq!(outcome.result(), RegisterResult::Invalid);
    assert!(outcome.summary().contains("age 121"));
    assert!(matches!(outcome, RegistrationOutcome::Invalid(_)));
}

#[test]
fn bootstrap_builds_registry_from_environment() {
    std::env::set_var("APP_LOG_LEVEL", "warn");
    std::env::set_var("REGISTRY_MIN_VOTING_AGE", "21");

    let (config, registry) = voter_registry::bootstrap().expect("bootstrap succeeds");

    assert_eq!(config.eligibility.min_voting_age, 21);
    assert_eq!(registry.eligibility(), &config.eligibility);
    assert_eq!(
        registry.register_voter(Some(&Person::new("Kai", 20, 20, Gender::Other, true))),
        RegisterResult::Invalid
    );
    assert_eq!(
        registry.register_voter(Some(&Person::new("Lee", 21, 21, Gender::Male, true))),
        RegisterResult::Valid
    );
}
