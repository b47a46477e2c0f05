use std::collections::BTreeSet;

use crate::*;
use proptest::prelude::*;

/// Maximum number of backing words for property tests.
const MAX_WORDS: usize = 6;

/// Strategy: a set with an arbitrary capacity and arbitrary members.
fn arb_set() -> impl Strategy<Value = IndexSet> {
    proptest::collection::vec(any::<u64>(), 0..=MAX_WORDS).prop_map(IndexSet::from_words)
}

/// Strategy: two sets sharing the same capacity.
fn arb_pair_same_capacity() -> impl Strategy<Value = (IndexSet, IndexSet)> {
    (0..=MAX_WORDS).prop_flat_map(|len| {
        (
            proptest::collection::vec(any::<u64>(), len),
            proptest::collection::vec(any::<u64>(), len),
        )
            .prop_map(|(a, b)| (IndexSet::from_words(a), IndexSet::from_words(b)))
    })
}

fn members(set: &IndexSet) -> BTreeSet<usize> {
    set.iter().collect()
}

fn make_set(capacity: usize, values: &[usize]) -> IndexSet {
    let mut set = IndexSet::with_length(capacity);
    set.extend(values.iter().copied());
    set
}

// ===== Example-based =====

#[test]
fn test_and_mismatched_capacity() {
    let a = make_set(64, &[1, 2, 3]);
    let b = make_set(256, &[2, 3, 4, 200]);

    let c = a.and(&b);
    assert_eq!(c.capacity(), 256);
    assert_eq!(c.iter().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_or_mismatched_capacity() {
    let a = make_set(64, &[1, 2]);
    let b = make_set(256, &[2, 200]);

    let c = a.or(&b);
    assert_eq!(c.capacity(), 256);
    assert_eq!(c.iter().collect::<Vec<_>>(), vec![1, 2, 200]);
}

#[test]
fn test_and_not_mismatched_capacity() {
    // `other` shorter: positions it lacks keep `self`'s bits.
    let a = make_set(256, &[1, 2, 100, 200]);
    let b = make_set(64, &[2]);
    let c = a.and_not(&b);
    assert_eq!(c.capacity(), 256);
    assert_eq!(c.iter().collect::<Vec<_>>(), vec![1, 100, 200]);

    // `other` longer: capacity widens, extra positions are empty.
    let c = b.and_not(&a);
    assert_eq!(c.capacity(), 256);
    assert!(c.is_empty());
}

#[test]
fn test_operands_unchanged() {
    let a = make_set(64, &[1, 2, 3]);
    let b = make_set(128, &[3, 100]);
    let (a0, b0) = (a.clone(), b.clone());

    let and = a.and(&b);
    let or = a.or(&b);
    let and_not = a.and_not(&b);

    assert_eq!(a.words(), a0.words());
    assert_eq!(b.words(), b0.words());

    assert_eq!(and.capacity(), 128);
    assert_eq!(and.iter().collect::<Vec<_>>(), vec![3]);
    assert_eq!(or.capacity(), 128);
    assert_eq!(or.iter().collect::<Vec<_>>(), vec![1, 2, 3, 100]);
    assert_eq!(and_not.capacity(), 128);
    assert_eq!(and_not.iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_assign_ops_in_place() {
    let b = make_set(128, &[3, 100]);

    let mut and = make_set(64, &[1, 2, 3]);
    and &= &b;
    assert_eq!(and.capacity(), 128);
    assert_eq!(and.iter().collect::<Vec<_>>(), vec![3]);

    let mut or = make_set(64, &[1, 2, 3]);
    or |= &b;
    assert_eq!(or.iter().collect::<Vec<_>>(), vec![1, 2, 3, 100]);

    // A shorter right-hand side clears the tail for AND and keeps it otherwise.
    let mut and = make_set(256, &[3, 200]);
    and &= &make_set(64, &[3]);
    assert_eq!(and.iter().collect::<Vec<_>>(), vec![3]);

    let mut and_not = make_set(256, &[3, 200]);
    and_not -= &make_set(64, &[3]);
    assert_eq!(and_not.capacity(), 256);
    assert_eq!(and_not.iter().collect::<Vec<_>>(), vec![200]);
}

#[test]
fn test_empty_operands() {
    let a = make_set(128, &[0, 127]);
    let empty = IndexSet::new();

    assert!(a.and(&empty).is_empty());
    assert_eq!(a.and(&empty).capacity(), 128);
    assert_eq!(a.or(&empty), a);
    assert_eq!(a.and_not(&empty), a);
    assert!(empty.and_not(&a).is_empty());
    assert_eq!(empty.or(&empty).capacity(), 0);
}

#[test]
fn test_operator_sugar() {
    let a = make_set(64, &[1, 2, 3]);
    let b = make_set(64, &[2, 3, 4]);

    assert_eq!(&a & &b, make_set(0, &[2, 3]));
    assert_eq!(&a | &b, make_set(0, &[1, 2, 3, 4]));
    assert_eq!(&a - &b, make_set(0, &[1]));
}

// ===== Laws =====

proptest! {
    #[test]
    fn and_or_are_commutative(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.or(&b), b.or(&a));
        prop_assert_eq!(a.and(&b), b.and(&a));
    }

    #[test]
    fn identities_hold(a in arb_set()) {
        let mut full = IndexSet::with_length(a.capacity());
        prop_assert_eq!(a.and(full.all(a.capacity())), a.clone());
        prop_assert_eq!(a.or(&IndexSet::new()), a);
    }

    #[test]
    fn and_not_recombines((a, b) in arb_pair_same_capacity()) {
        prop_assert_eq!(a.and_not(&b).or(&a.and(&b)), a);
    }

    #[test]
    fn and_not_recombines_any_capacity(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.and_not(&b).or(&a.and(&b)), a);
    }

    #[test]
    fn results_match_model(a in arb_set(), b in arb_set()) {
        let (ma, mb) = (members(&a), members(&b));
        let capacity = a.capacity().max(b.capacity());

        let and = a.and(&b);
        let or = a.or(&b);
        let and_not = a.and_not(&b);

        prop_assert_eq!(and.capacity(), capacity);
        prop_assert_eq!(or.capacity(), capacity);
        prop_assert_eq!(and_not.capacity(), capacity);

        prop_assert_eq!(members(&and), ma.intersection(&mb).copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(members(&or), ma.union(&mb).copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(members(&and_not), ma.difference(&mb).copied().collect::<BTreeSet<_>>());
    }

    #[test]
    fn assign_ops_match_methods(a in arb_set(), b in arb_set()) {
        let mut and = a.clone();
        and &= &b;
        let expected = a.and(&b);
        prop_assert_eq!(and.words(), expected.words());

        let mut or = a.clone();
        or |= &b;
        let expected = a.or(&b);
        prop_assert_eq!(or.words(), expected.words());

        let mut and_not = a.clone();
        and_not -= &b;
        let expected = a.and_not(&b);
        prop_assert_eq!(and_not.words(), expected.words());
    }

    #[test]
    fn count_matches_iter(a in arb_set()) {
        prop_assert_eq!(a.count(), a.iter().count());
        for i in 0..a.capacity() {
            prop_assert_eq!(a.get(i), Ok(a.contains(i)));
        }
    }

    #[test]
    fn eq_ignores_zero_padding(a in arb_set(), extra in 0..=MAX_WORDS) {
        let mut padded = a.clone();
        padded.ensure_capacity(a.capacity() + extra * WORD_BITS);
        prop_assert_eq!(&padded, &a);
        prop_assert_eq!(&a, &padded);
    }
}
