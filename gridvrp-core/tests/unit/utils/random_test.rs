use super::*;

#[test]
fn can_produce_values_within_inclusive_bounds() {
    let random = DefaultRandom::with_seed(42);

    (0..1000).for_each(|_| {
        let value = random.uniform_int(-5, 5);
        assert!((-5..=5).contains(&value));
    });
}

#[test]
fn can_return_min_when_bounds_are_equal() {
    let random = DefaultRandom::with_seed(42);

    assert_eq!(random.uniform_int(7, 7), 7);
}

#[test]
fn can_reproduce_sequence_for_same_seed() {
    let (first, second) = (DefaultRandom::with_seed(123), DefaultRandom::with_seed(123));

    let firsts = (0..100).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let seconds = (0..100).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(firsts, seconds);
}

parameterized_test! {can_derive_stable_stream_seeds, stream, {
    can_derive_stable_stream_seeds_impl(stream);
}}

can_derive_stable_stream_seeds! {
    case_01_geometry: RandomStream::Geometry,
    case_02_demand: RandomStream::Demand,
    case_03_time_windows: RandomStream::TimeWindows,
}

fn can_derive_stable_stream_seeds_impl(stream: RandomStream) {
    assert_eq!(get_seed(true, stream), get_seed(true, stream));
}

#[test]
fn can_keep_deterministic_streams_distinct() {
    let seeds =
        [RandomStream::Geometry, RandomStream::Demand, RandomStream::TimeWindows].map(|stream| get_seed(true, stream));

    assert_eq!(seeds.len(), 3);
    assert!(seeds[0] != seeds[1] && seeds[1] != seeds[2] && seeds[0] != seeds[2]);
}
