use super::*;

parameterized_test! {can_detect_window_intersection, (first, second, expected), {
    can_detect_window_intersection_impl(first, second, expected);
}}

can_detect_window_intersection! {
    case_01_overlapping: ((0, 10), (5, 15), true),
    case_02_touching: ((0, 10), (10, 20), true),
    case_03_disjoint: ((0, 10), (11, 20), false),
    case_04_nested: ((0, 100), (10, 20), true),
    case_05_reversed_order: ((11, 20), (0, 10), false),
}

fn can_detect_window_intersection_impl(first: (i64, i64), second: (i64, i64), expected: bool) {
    let first = TimeWindow::new(first.0, first.1);
    let second = TimeWindow::new(second.0, second.1);

    assert_eq!(first.intersects(&second), expected);
}

#[test]
fn can_check_containment() {
    let window = TimeWindow::new(10, 20);

    assert!(window.contains(10));
    assert!(window.contains(15));
    assert!(window.contains(20));
    assert!(!window.contains(9));
    assert!(!window.contains(21));
}

#[test]
fn can_cover_full_horizon() {
    let window = TimeWindow::full_horizon(24 * 3600);

    assert_eq!(window.start, 0);
    assert_eq!(window.end, 24 * 3600);
    assert_eq!(window.width(), 24 * 3600);
}
