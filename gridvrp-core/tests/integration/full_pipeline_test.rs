use crate::helpers::generation::{create_test_environment, create_test_params};
use crate::prelude::*;
use std::sync::Arc;

fn create_pipeline_config() -> (InstanceConfig, GenerationParams) {
    let config = InstanceConfig {
        orders: 10,
        vehicles: 3,
        hard_capacity: 10,
        soft_capacity: 5,
        soft_capacity_cost: 100,
        use_same_vehicle_costs: true,
    };

    (config, create_test_params())
}

fn solve_pipeline() -> Assignment {
    let (config, params) = create_pipeline_config();
    let environment = create_test_environment();

    let instance = generate_instance(&config, &params, &environment).unwrap();
    let model = configure_routing_model(&instance, &config, &params).unwrap();
    let solver = BestInsertionSolver::new(Arc::new(|_: &str| {}));

    solver.solve(&model, &SearchParameters::default()).unwrap().unwrap()
}

#[test]
fn can_solve_generated_instance_end_to_end() {
    let (config, params) = create_pipeline_config();
    let environment = create_test_environment();

    let instance = generate_instance(&config, &params, &environment).unwrap();
    let model = configure_routing_model(&instance, &config, &params).unwrap();
    let solver = BestInsertionSolver::new(Arc::new(|_: &str| {}));

    let assignment = solver.solve(&model, &SearchParameters::default()).unwrap().unwrap();

    assert_eq!(assignment.routes.len(), config.vehicles);

    // every order is either served exactly once or paid for
    let served = assignment.routes.iter().flat_map(|route| route.orders()).collect::<Vec<_>>();
    let skipped = assignment.unassigned.iter().map(|(node, _)| *node).collect::<Vec<_>>();
    let mut all = served.clone();
    all.extend(skipped.iter().copied());
    all.sort_unstable();
    assert_eq!(all, model.orders().collect::<Vec<_>>());

    for (node, penalty) in &assignment.unassigned {
        assert!(*node > 0 && *node <= config.orders);
        assert_eq!(*penalty, params.skip_penalty);
    }

    for route in &assignment.routes {
        // load never exceeds the hard capacity and service starts within time windows
        for (idx, stop) in route.stops.iter().enumerate() {
            assert!(stop.cumuls[0] <= config.hard_capacity);

            let is_depot_end = idx == 0 || idx == route.stops.len() - 1;
            if !is_depot_end {
                assert!(instance.order_window(stop.node).contains(stop.cumuls[1]));
            }
        }

        let overage = (route.end_cumul(0).unwrap() - config.soft_capacity).max(0);
        assert_eq!(route.soft_bound_cost, overage * config.soft_capacity_cost);
    }

    let breakdown = assignment.transit_cost()
        + assignment.soft_bound_cost()
        + assignment.penalty_cost()
        + assignment.group_cost;
    assert_eq!(assignment.total_cost(), breakdown);
}

#[test]
fn can_reproduce_full_pipeline_deterministically() {
    let first = solve_pipeline();
    let second = solve_pipeline();

    assert_eq!(first, second);
}
