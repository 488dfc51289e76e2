use super::*;

#[test]
fn can_keep_defaults_for_empty_overrides() {
    let params = SearchParameters::from_overrides("").unwrap();

    assert_eq!(params, SearchParameters::default());
    assert_eq!(params.first_solution_strategy, FirstSolutionStrategy::CheapestInsertion);
    assert_eq!(params.time_limit_ms, None);
    assert!(!params.log_search);
}

#[test]
fn can_override_single_field_keeping_defaults() {
    let params = SearchParameters::from_overrides(r#"{"timeLimitMs": 250}"#).unwrap();

    assert_eq!(params.time_limit_ms, Some(250));
    assert_eq!(params.first_solution_strategy, FirstSolutionStrategy::CheapestInsertion);
    assert!(!params.log_search);
}

#[test]
fn can_override_all_fields() {
    let params = SearchParameters::from_overrides(
        r#"{"firstSolutionStrategy": "firstFeasible", "timeLimitMs": 100, "logSearch": true}"#,
    )
    .unwrap();

    assert_eq!(params.first_solution_strategy, FirstSolutionStrategy::FirstFeasible);
    assert_eq!(params.time_limit_ms, Some(100));
    assert!(params.log_search);
}

parameterized_test! {cannot_parse_invalid_overrides, text, {
    cannot_parse_invalid_overrides_impl(text);
}}

cannot_parse_invalid_overrides! {
    case_01_malformed: "{not json",
    case_02_unknown_field: r#"{"unknownKnob": 1}"#,
    case_03_wrong_type: r#"{"timeLimitMs": "fast"}"#,
    case_04_unknown_strategy: r#"{"firstSolutionStrategy": "simulatedAnnealing"}"#,
}

fn cannot_parse_invalid_overrides_impl(text: &str) {
    let result = SearchParameters::from_overrides(text);

    assert!(result.unwrap_err().to_string().contains("cannot parse search parameters"));
}
