use proptest::prelude::*;
use sort_trace::{Action, Algorithm, SortDirection, SwapValues};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn array() -> impl Strategy<Value = Vec<i64>> {
    // Narrow value range so duplicates are common
    prop::collection::vec(1i64..=20, 0..60)
}

/// Walk the log against a copy of the input, checking every recorded value
/// against the array state at that step.
fn check_step_by_step(
    algorithm: Algorithm,
    data: &[i64],
    direction: SortDirection,
) -> Result<(), TestCaseError> {
    let log = algorithm.sort(data, direction);
    let mut state = data.to_vec();

    for (step, action) in log.iter().enumerate() {
        match action {
            Action::Compare { positions, values } => {
                let [i, j] = *positions;
                let seen = [state[i], state[j]];
                prop_assert_eq!(values, &seen, "compare at step {}", step);
            }
            Action::Swap { positions, values } => {
                let [i, j] = *positions;
                prop_assert_ne!(i, j, "self-swap at step {}", step);
                let before = [state[i], state[j]];
                state.swap(i, j);
                let after = [state[i], state[j]];
                match algorithm.swap_values() {
                    Some(SwapValues::BeforeExchange) => prop_assert_eq!(values, &before),
                    Some(SwapValues::AfterExchange) => prop_assert_eq!(values, &after),
                    None => prop_assert!(false, "{} should not swap", algorithm),
                }
            }
            Action::Set { positions, values } => {
                let [k] = *positions;
                let [v] = *values;
                prop_assert_ne!(state[k], v, "no-op set at step {}", step);
                state[k] = v;
            }
        }
    }

    prop_assert!(direction.is_sorted(&state));
    prop_assert_eq!(state, log.replay(data));
    Ok(())
}

proptest! {
    #[test]
    fn replay_sorts(alg in algorithm(), dir in direction(), data in array()) {
        let log = alg.sort(&data, dir);
        let result = log.replay(&data);
        prop_assert!(dir.is_sorted(&result));

        let mut expected = data.clone();
        expected.sort();
        if dir == SortDirection::Descending {
            expected.reverse();
        }
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn input_is_not_mutated(alg in algorithm(), dir in direction(), data in array()) {
        let before = data.clone();
        let _ = alg.sort(&data, dir);
        prop_assert_eq!(data, before);
    }

    #[test]
    fn deterministic(alg in algorithm(), dir in direction(), data in array()) {
        let first = serde_json::to_string(&alg.sort(&data, dir)).unwrap();
        let second = serde_json::to_string(&alg.sort(&data, dir)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_step_matches_working_array(alg in algorithm(), dir in direction(), data in array()) {
        check_step_by_step(alg, &data, dir)?;
    }

    #[test]
    fn merge_never_compares(dir in direction(), data in array()) {
        let counts = Algorithm::Merge.sort(&data, dir).counts();
        prop_assert_eq!(counts.compares, 0);
        prop_assert_eq!(counts.swaps, 0);
    }

    #[test]
    fn quadratic_compare_counts(dir in direction(), data in array()) {
        let n = data.len();
        let full = n * n.saturating_sub(1) / 2;
        prop_assert_eq!(Algorithm::Bubble.sort(&data, dir).counts().compares, full);
        prop_assert_eq!(Algorithm::Selection.sort(&data, dir).counts().compares, full);
        prop_assert!(Algorithm::Insertion.sort(&data, dir).counts().compares <= full);
    }

    #[test]
    fn only_merge_sets(alg in algorithm(), dir in direction(), data in array()) {
        let counts = alg.sort(&data, dir).counts();
        if alg != Algorithm::Merge {
            prop_assert_eq!(counts.sets, 0);
        }
    }
}
