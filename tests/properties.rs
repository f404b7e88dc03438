// ABOUTME: Property tests for listing order and environment parsing.
// ABOUTME: Uses proptest to check invariants over generated inputs.

use dockery::extract::parse_env;
use dockery::status::{LifecycleState, sort_containers, sort_rank};
use proptest::prelude::*;

fn state_strategy() -> impl Strategy<Value = Option<LifecycleState>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(LifecycleState::ALL.to_vec()).prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn sort_is_stable_and_ordered_by_rank(states in proptest::collection::vec(state_strategy(), 0..40)) {
        let mut items: Vec<(usize, Option<LifecycleState>)> = states.into_iter().enumerate().collect();
        sort_containers(&mut items, |item| item.1);

        for pair in items.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (rank_a, rank_b) = (sort_rank(a.1), sort_rank(b.1));
            prop_assert!(rank_a <= rank_b);
            if rank_a == rank_b {
                prop_assert!(a.0 < b.0, "equal ranks keep original order");
            }
        }
    }

    #[test]
    fn unknown_states_sort_after_known(states in proptest::collection::vec(state_strategy(), 1..40)) {
        let mut items = states;
        sort_containers(&mut items, |s| *s);

        if let Some(first_unknown) = items.iter().position(Option::is_none) {
            prop_assert!(items[first_unknown..].iter().all(Option::is_none));
        }
    }

    #[test]
    fn env_splits_on_first_equals(key in "[A-Z_][A-Z0-9_]{0,12}", value in "[ -~]{0,24}") {
        let entry = format!("{key}={value}");
        let env = parse_env([entry.as_str()]);
        prop_assert_eq!(env.get(&key), Some(&value));
    }

    #[test]
    fn env_drops_entries_without_equals(entry in "[A-Za-z0-9_ ]{0,24}") {
        prop_assert!(parse_env([entry.as_str()]).is_empty());
    }
}

#[test]
fn env_example_from_documentation() {
    let env = parse_env(["A=1", "B=2=2", "NOEQ"]);
    assert_eq!(env.len(), 2);
    assert_eq!(env["A"], "1");
    assert_eq!(env["B"], "2=2");
}
