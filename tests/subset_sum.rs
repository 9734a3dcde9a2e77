use algo_drills::optimization::invariant::{Invariant, SumsTo};
use algo_drills::optimization::subset_sum::subset_sum;

#[test]
fn example_sequence_yields_exactly_the_three_known_selections() {
    let values = [4, 32, 2, 35, 67, 3, 53, 5];
    let matches = subset_sum(&values, 39);
    assert_eq!(
        matches,
        vec![vec![0, 1, 5], vec![0, 3], vec![1, 2, 7]],
        "include-first order must be stable"
    );
}

#[test]
fn every_match_sums_to_the_target() {
    let values = [4, 32, 2, 35, 67, 3, 53, 5];
    let target = 39;
    let sums_to = SumsTo { values: &values[..], target };
    let matches = subset_sum(&values, target);
    assert!(!matches.is_empty(), "the example must have solutions");
    for path in &matches {
        assert!(sums_to.check(path), "path {path:?} must sum to {target}");
    }
}

#[test]
fn paths_use_strictly_increasing_in_range_indices() {
    let values = [1, 2, 3, 4, 5, 6];
    for path in subset_sum(&values, 7) {
        assert!(
            path.windows(2).all(|w| w[0] < w[1]),
            "indices in {path:?} must be strictly increasing"
        );
        assert!(path.iter().all(|&i| i < values.len()));
    }
}

#[test]
fn empty_sequence_with_nonzero_target_yields_nothing() {
    assert!(subset_sum(&[], 5).is_empty());
}

#[test]
fn empty_sequence_with_zero_target_yields_the_empty_path() {
    assert_eq!(subset_sum(&[], 0), vec![Vec::<usize>::new()]);
}

#[test]
fn zero_target_matches_before_any_decision_is_taken() {
    // the initial state already matches, so the empty path is the only result
    assert_eq!(subset_sum(&[1, 2, 3], 0), vec![Vec::<usize>::new()]);
}

#[test]
fn unreachable_target_yields_nothing() {
    assert!(subset_sum(&[2, 4, 6], 5).is_empty());
}

#[test]
fn negative_target_yields_nothing_for_nonnegative_values() {
    assert!(subset_sum(&[1, 2], -3).is_empty());
}

#[test]
fn duplicate_values_at_distinct_positions_are_distinct_members() {
    let matches = subset_sum(&[3, 1, 3], 3);
    assert_eq!(matches, vec![vec![0], vec![2]]);
}

#[test]
fn a_match_is_recorded_once_and_never_extended() {
    // the trailing zero could extend [0] without changing the sum, but a
    // matched path stops before any further decision
    let matches = subset_sum(&[5, 0], 5);
    assert_eq!(matches, vec![vec![0]]);
}

#[test]
fn prefix_sums_of_matches_never_exceed_the_target() {
    let values = [8, 6, 7, 5, 3, 0, 9];
    let target = 15;
    for path in subset_sum(&values, target) {
        let mut acc = 0;
        for &i in &path {
            acc += values[i];
            assert!(acc <= target, "prefix of {path:?} overshoots {target}");
        }
    }
}

#[test]
fn enumeration_is_deterministic_across_calls() {
    let values = [4, 32, 2, 35, 67, 3, 53, 5];
    assert_eq!(subset_sum(&values, 39), subset_sum(&values, 39));
}
