// ==============================================
// CROSS-SEQUENCE INVARIANT TESTS (integration)
// ==============================================
//
// Behavior of the iterate action that must hold for every registered
// sequence implementation.

use listkit::action::iterate::{ELEMENT_PREFIX, NAME, measure};
use listkit::action::IterateAction;
use listkit::ds::BoundedList;
use listkit::for_each_sequence;
use listkit::traits::{OrderedSequence, TimedListAction};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn contents<S: OrderedSequence<String>>(seq: &S) -> Vec<String> {
    OrderedSequence::iter(seq).cloned().collect()
}

fn expected_elements(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{ELEMENT_PREFIX} {i}")).collect()
}

// ==============================================
// Population
// ==============================================

#[test]
fn empty_sequence_holds_exactly_generated_elements() {
    for &n in &[0usize, 1, 3, 17, 1_000] {
        for_each_sequence! {
            with |seq_id, _display_name, make_seq| {
                let mut seq = make_seq(n);
                measure(&mut seq, n).unwrap();
                assert_eq!(contents(&seq), expected_elements(n), "[{}] n={}", seq_id, n);
            }
        }
    }
}

#[test]
fn three_elements_scenario() {
    for_each_sequence! {
        with |seq_id, _display_name, make_seq| {
            let mut seq = make_seq(3);
            measure(&mut seq, 3).unwrap();
            assert_eq!(
                contents(&seq),
                vec!["Element 0", "Element 1", "Element 2"],
                "[{}]",
                seq_id
            );
        }
    }
}

#[test]
fn zero_elements_on_populated_sequence_is_unchanged() {
    for_each_sequence! {
        with |seq_id, _display_name, make_seq| {
            let mut seq = make_seq(1);
            seq.try_push("X".to_string()).unwrap();
            measure(&mut seq, 0).unwrap();
            assert_eq!(contents(&seq), vec!["X"], "[{}]", seq_id);
        }
    }
}

#[test]
fn length_grows_by_exactly_n_after_random_prefix() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..20 {
        let existing: Vec<String> = (0..rng.random_range(0..50))
            .map(|_| format!("pre-{}", rng.random::<u32>()))
            .collect();
        let n = rng.random_range(0..200usize);

        for_each_sequence! {
            with |seq_id, _display_name, make_seq| {
                let mut seq = make_seq(existing.len() + n);
                for value in &existing {
                    seq.try_push(value.clone()).unwrap();
                }

                measure(&mut seq, n).unwrap();

                let all = contents(&seq);
                assert_eq!(all.len(), existing.len() + n, "[{}]", seq_id);
                assert_eq!(&all[..existing.len()], existing.as_slice(), "[{}]", seq_id);
                assert_eq!(all[existing.len()..].to_vec(), expected_elements(n), "[{}]", seq_id);
            }
        }
    }
}

// ==============================================
// Labeling
// ==============================================

#[test]
fn label_is_constant_regardless_of_input() {
    let action = IterateAction;
    assert_eq!(action.name(), "iterate()");
    assert_eq!(NAME, "iterate()");

    let mut seq: Vec<String> = Vec::new();
    action.time_action(&mut seq, 10).unwrap();
    assert_eq!(action.name(), "iterate()");
}

// ==============================================
// Capacity failures
// ==============================================

#[test]
fn capacity_exceeded_is_reported_and_prefix_kept() {
    let mut list: BoundedList<String> = BoundedList::with_capacity(4);
    let err = measure(&mut list, 10).unwrap_err();

    assert_eq!(err.capacity(), 4);
    assert!(err.to_string().contains("capacity exceeded"));
    assert_eq!(contents(&list), expected_elements(4));
}

#[test]
fn capacity_exceeded_by_pre_existing_elements() {
    let mut list: BoundedList<String> = BoundedList::with_capacity(2);
    list.try_push("X".to_string()).unwrap();
    list.try_push("Y".to_string()).unwrap();

    let err = measure(&mut list, 1).unwrap_err();
    assert_eq!(err.capacity(), 2);
    assert_eq!(contents(&list), vec!["X", "Y"]);
}

#[test]
fn full_bounded_list_with_zero_elements_still_succeeds() {
    let mut list: BoundedList<String> = BoundedList::with_capacity(1);
    list.try_push("X".to_string()).unwrap();
    assert!(measure(&mut list, 0).is_ok());
}
