use super::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

fn create_container_with_locations(speed: i64, points: &[(i64, i64)]) -> LocationContainer {
    let mut container = LocationContainer::new(speed, Arc::new(DefaultRandom::with_seed(0)));
    points.iter().for_each(|&(x, y)| container.add_location(x, y));

    container
}

#[test]
fn can_add_scripted_random_locations() {
    let random = Arc::new(FakeRandom::new(vec![10, 20, 30, 40]));
    let mut container = LocationContainer::new(10, random);

    container.add_random_location(100, 100);
    container.add_random_location(100, 100);

    assert_eq!(container.len(), 2);
    assert_eq!(container.location(0), GridPoint { x: 10, y: 20 });
    assert_eq!(container.location(1), GridPoint { x: 30, y: 40 });
}

#[test]
fn can_keep_random_locations_within_bounds() {
    let mut container = LocationContainer::new(10, Arc::new(DefaultRandom::with_seed(7)));

    (0..100).for_each(|_| container.add_random_location(50, 80));

    (0..container.len()).for_each(|node| {
        let point = container.location(node);
        assert!((0..=50).contains(&point.x));
        assert!((0..=80).contains(&point.y));
    });
}

parameterized_test! {can_compute_manhattan_distance, (from, to, expected), {
    can_compute_manhattan_distance_impl(from, to, expected);
}}

can_compute_manhattan_distance! {
    case_01_same_point: ((0, 0), (0, 0), 0),
    case_02_axis_aligned: ((0, 0), (5, 0), 5),
    case_03_diagonal: ((1, 2), (4, 6), 7),
    case_04_negative_direction: ((4, 6), (1, 2), 7),
}

fn can_compute_manhattan_distance_impl(from: (i64, i64), to: (i64, i64), expected: i64) {
    let container = create_container_with_locations(10, &[from, to]);

    assert_eq!(container.manhattan_distance(0, 1), expected);
    assert_eq!(container.manhattan_distance(1, 0), expected);
}

parameterized_test! {can_round_travel_time_up, (distance, speed, expected), {
    can_round_travel_time_up_impl(distance, speed, expected);
}}

can_round_travel_time_up! {
    case_01_exact_division: (30, 10, 3),
    case_02_rounded_up: (25, 10, 3),
    case_03_below_one_second: (1, 10, 1),
    case_04_zero_distance: (0, 10, 0),
}

fn can_round_travel_time_up_impl(distance: i64, speed: i64, expected: i64) {
    let container = create_container_with_locations(speed, &[(0, 0), (distance, 0)]);

    assert_eq!(container.travel_time(0, 1), expected);
}
