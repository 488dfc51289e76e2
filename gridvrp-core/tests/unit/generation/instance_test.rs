use super::*;
use crate::helpers::generation::{create_test_config, create_test_environment, create_test_params};

#[test]
fn can_generate_instance_of_requested_size() {
    let config = create_test_config(10, 2);
    let params = create_test_params();

    let instance = generate_instance(&config, &params, &create_test_environment()).unwrap();

    assert_eq!(instance.node_count(), 11);
    assert_eq!(instance.orders(), 10);
    assert_eq!(instance.time_windows.len(), 10);
}

#[test]
fn can_keep_generated_values_within_configured_bounds() {
    let config = create_test_config(50, 5);
    let params = create_test_params();

    let instance = generate_instance(&config, &params, &create_test_environment()).unwrap();

    assert_eq!(instance.demand.node_demand(DEPOT), 0);
    (1..instance.node_count()).for_each(|node| {
        let demand = instance.demand.node_demand(node);
        assert!((params.demand_range.0..=params.demand_range.1).contains(&demand));

        let point = instance.locations.location(node);
        assert!((0..=params.x_max).contains(&point.x));
        assert!((0..=params.y_max).contains(&point.y));

        let window = instance.order_window(node);
        assert!(window.start >= 0);
        assert!(window.end <= params.horizon);
        assert_eq!(window.width(), params.window_duration);
    });
}

#[test]
fn can_reproduce_instance_with_deterministic_seed() {
    let config = create_test_config(20, 3);
    let params = create_test_params();

    let first = generate_instance(&config, &params, &create_test_environment()).unwrap();
    let second = generate_instance(&config, &params, &create_test_environment()).unwrap();

    let first = serde_json::to_string(&first).unwrap();
    let second = serde_json::to_string(&second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn cannot_generate_instance_from_invalid_config() {
    let config = create_test_config(0, 2);
    let params = create_test_params();

    assert!(generate_instance(&config, &params, &create_test_environment()).is_err());
}
