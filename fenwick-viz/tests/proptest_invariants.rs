//! Property-based invariant tests for `FenwickTree`.
//!
//! These hold for any array of at least one element:
//!
//! 1. Every prefix sum matches a naive sum after construction.
//! 2. A point update shifts the total by exactly `new - old`.
//! 3. Rebuilding twice yields the same cells.
//! 4. Rebuilding matches a sequence of point updates from zero.
//! 5. At most one trace kind is current after any operation.
//! 6. Shrinking then growing back leaves zeros in the dropped tail.
//! 7. The two arrays always have the same length.

use fenwick_viz::{Error, FenwickTree, Trace, TraceKind};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..=1_000_000, 1..=96)
}

#[derive(Clone, Debug)]
enum Op {
    Set(usize, i64),
    Query(usize),
    Resize(usize),
    Rebuild,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..=100, -1_000i64..=1_000).prop_map(|(i, v)| Op::Set(i, v)),
        4 => (0usize..=100).prop_map(Op::Query),
        1 => (0usize..=48).prop_map(Op::Resize),
        1 => Just(Op::Rebuild),
    ]
}

fn naive_prefix(values: &[i64], len: usize) -> i64 {
    values[..len].iter().sum()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Prefix sums after construction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prefix_sums_match_naive(values in values_strategy()) {
        let mut t = FenwickTree::from_values(values.clone()).unwrap();
        for k in 0..=values.len() {
            prop_assert_eq!(t.prefix_sum(k).unwrap(), naive_prefix(&values, k), "k={}", k);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Update consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn update_shifts_total_by_delta(
        values in values_strategy(),
        index in any::<prop::sample::Index>(),
        new_value in -1_000_000i64..=1_000_000,
    ) {
        let i = index.index(values.len());
        let mut t = FenwickTree::from_values(values.clone()).unwrap();
        let before: i64 = values.iter().sum();

        t.set_value(i, new_value).unwrap();
        prop_assert_eq!(t.prefix_sum(values.len()).unwrap(), before - values[i] + new_value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3 & 4. Rebuild semantics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rebuild_is_idempotent(values in values_strategy()) {
        let mut t = FenwickTree::from_values(values.clone()).unwrap();
        t.rebuild_from(values.clone()).unwrap();
        let first = t.tree().to_vec();
        t.rebuild_from(values).unwrap();
        prop_assert_eq!(t.tree(), first.as_slice());
    }

    #[test]
    fn rebuild_matches_point_updates_from_zero(values in values_strategy()) {
        let mut incremental = FenwickTree::with_len(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            incremental.set_value(i, v).unwrap();
        }
        let rebuilt = FenwickTree::from_values(values).unwrap();
        prop_assert_eq!(incremental.tree(), rebuilt.tree());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 & 7. Traces and length coupling under arbitrary operation sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operation_sequences_keep_invariants(
        values in values_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..64),
    ) {
        let mut t = FenwickTree::from_values(values.clone()).unwrap();
        let mut model = values;

        for op in ops {
            let before = t.snapshot();
            match op {
                Op::Set(i, v) => match t.set_value(i, v).map(|_| ()) {
                    Ok(()) => {
                        prop_assert!(i < model.len());
                        model[i] = v;
                        prop_assert_eq!(t.trace().kind(), Some(TraceKind::Update));
                        prop_assert!(!t.trace().is_empty());
                        prop_assert_eq!(t.last_sum(), 0);
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::InvalidIndex { index: i, len: model.len() });
                        prop_assert_eq!(t.snapshot(), before);
                    }
                },
                Op::Query(k) => match t.prefix_sum(k) {
                    Ok(sum) => {
                        prop_assert_eq!(sum, naive_prefix(&model, k));
                        prop_assert_eq!(t.trace().kind(), Some(TraceKind::Query));
                        prop_assert_eq!(t.trace().sum(), Some(sum));
                        prop_assert_eq!(t.last_sum(), sum);
                    }
                    Err(_) => {
                        prop_assert!(k > model.len());
                        prop_assert_eq!(t.snapshot(), before);
                    }
                },
                Op::Resize(n) => match t.resize(n) {
                    Ok(()) => {
                        model.resize(n, 0);
                        prop_assert_eq!(t.trace(), &Trace::Empty);
                        prop_assert_eq!(t.last_sum(), 0);
                    }
                    Err(e) => {
                        prop_assert_eq!(n, 0);
                        prop_assert_eq!(e, Error::InvalidResizeLength { len: 0 });
                        prop_assert_eq!(t.snapshot(), before);
                    }
                },
                Op::Rebuild => {
                    t.rebuild();
                    prop_assert_eq!(t.trace(), &Trace::Empty);
                }
            }

            prop_assert_eq!(t.values(), model.as_slice());
            prop_assert_eq!(t.tree().len(), t.values().len());
        }

        for k in 0..=model.len() {
            prop_assert_eq!(t.peek_prefix_sum(k).unwrap(), naive_prefix(&model, k));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Lossy shrink
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shrink_then_grow_leaves_zeros(
        values in values_strategy(),
        keep in any::<prop::sample::Index>(),
    ) {
        let n = values.len();
        let m = keep.index(n).max(1);
        let mut t = FenwickTree::from_values(values.clone()).unwrap();

        t.resize(m).unwrap();
        t.resize(n).unwrap();

        prop_assert_eq!(&t.values()[..m], &values[..m]);
        prop_assert!(t.values()[m..].iter().all(|&v| v == 0));
        prop_assert_eq!(t.prefix_sum(n).unwrap(), naive_prefix(&values, m));
    }
}
