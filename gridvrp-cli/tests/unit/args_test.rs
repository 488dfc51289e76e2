use super::*;

fn get_matches(params: &[&str]) -> ArgMatches {
    let args = [&["gridvrp-cli"], params].concat();

    get_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_use_default_arguments() {
    let options = get_run_options(&get_matches(&[])).unwrap();

    assert_eq!(options.instance.orders, 100);
    assert_eq!(options.instance.vehicles, 20);
    assert_eq!(options.instance.hard_capacity, 80);
    assert_eq!(options.instance.soft_capacity, 40);
    assert_eq!(options.instance.soft_capacity_cost, 5000);
    assert!(!options.instance.use_same_vehicle_costs);
    assert!(!options.use_deterministic_seed);
    assert_eq!(options.search, SearchParameters::default());
    assert_eq!(options.dump_instance, None);
    assert_eq!(options.out_solution, None);
}

#[test]
fn can_override_instance_arguments() {
    let options = get_run_options(&get_matches(&[
        "--orders",
        "10",
        "--vehicles",
        "3",
        "--hard-capacity",
        "15",
        "--soft-capacity",
        "7",
        "--soft-capacity-cost",
        "100",
        "--deterministic",
        "--same-vehicle-costs",
    ]))
    .unwrap();

    assert_eq!(options.instance.orders, 10);
    assert_eq!(options.instance.vehicles, 3);
    assert_eq!(options.instance.hard_capacity, 15);
    assert_eq!(options.instance.soft_capacity, 7);
    assert_eq!(options.instance.soft_capacity_cost, 100);
    assert!(options.instance.use_same_vehicle_costs);
    assert!(options.use_deterministic_seed);
}

#[test]
fn can_parse_search_params_overrides() {
    let matches = get_matches(&["--search-params", r#"{"firstSolutionStrategy":"firstFeasible","timeLimitMs":250}"#]);

    let options = get_run_options(&matches).unwrap();

    assert_eq!(options.search.first_solution_strategy, FirstSolutionStrategy::FirstFeasible);
    assert_eq!(options.search.time_limit_ms, Some(250));
    assert!(!options.search.log_search);
}

#[test]
fn can_capture_output_paths() {
    let matches = get_matches(&["-d", "instance.json", "-o", "plan.txt"]);

    let options = get_run_options(&matches).unwrap();

    assert_eq!(options.dump_instance.as_deref(), Some("instance.json"));
    assert_eq!(options.out_solution.as_deref(), Some("plan.txt"));
}

#[test]
fn cannot_read_malformed_integer_arguments() {
    for params in [&["--orders", "abc"][..], &["--hard-capacity", "1.5"][..], &["--vehicles=-1"][..]] {
        let result = get_run_options(&get_matches(params));

        assert!(result.unwrap_err().contains("cannot get integer value"));
    }
}

#[test]
fn cannot_accept_invalid_configuration() {
    let result = get_run_options(&get_matches(&["--orders", "0", "--vehicles", "0"]));

    assert_eq!(
        result.err(),
        Some(
            "an instance size must be greater than zero, a vehicle fleet size must be greater than zero".to_string()
        )
    );
}

#[test]
fn cannot_accept_soft_capacity_above_hard() {
    let result = get_run_options(&get_matches(&["--soft-capacity", "80"]));

    assert_eq!(
        result.err(),
        Some("a hard capacity must be higher than a soft capacity when both are enabled".to_string())
    );
}

#[test]
fn cannot_accept_malformed_search_params() {
    let result = get_run_options(&get_matches(&["--search-params", "{bad"]));

    assert!(result.unwrap_err().starts_with("cannot parse search parameters"));
}

#[test]
fn cannot_accept_unknown_flags() {
    get_app().try_get_matches_from(vec!["gridvrp-cli", "--unknown-flag"]).unwrap_err();
}
