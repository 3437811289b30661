//! Perturbation operators over cyclic orderings.
//!
//! Every operator takes two distinct positions `i != j`, normalizes them so
//! that `i < j`, and returns a **new** ordering; the input is never mutated.
//! All operators preserve length and the multiset of items.
//!
//! | Operator                      | Effect on `o[i..=j]`                  | Cost |
//! |-------------------------------|---------------------------------------|------|
//! | [`Perturbation::SegmentReverse`]  | reversed (2-opt)                  | O(n) |
//! | [`Perturbation::SegmentRelocate`] | rotated right by one position     | O(n) |
//! | [`Perturbation::PairwiseSwap`]    | only endpoints exchanged          | O(n) |
//!
//! `SegmentRelocate` is a rotate-by-one: position `i` receives the item
//! previously at `j` and every other position `t` in `(i, j]` receives the
//! item previously at `t - 1`. It is equivalent to lifting the item at `j`
//! and reinserting it in front of position `i`.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of neighborhood moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Perturbation {
    /// Reverse the segment between the two positions (inclusive).
    SegmentReverse,
    /// Rotate the segment between the two positions right by one.
    SegmentRelocate,
    /// Exchange the items at the two positions.
    PairwiseSwap,
}

impl Perturbation {
    /// All operators in evaluation order. Earlier operators win cost ties.
    pub const ALL: [Perturbation; 3] = [
        Perturbation::SegmentReverse,
        Perturbation::SegmentRelocate,
        Perturbation::PairwiseSwap,
    ];

    /// Stable index into [`Perturbation::ALL`].
    pub fn index(self) -> usize {
        match self {
            Perturbation::SegmentReverse => 0,
            Perturbation::SegmentRelocate => 1,
            Perturbation::PairwiseSwap => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Perturbation::SegmentReverse => "segment-reverse",
            Perturbation::SegmentRelocate => "segment-relocate",
            Perturbation::PairwiseSwap => "pairwise-swap",
        }
    }

    /// Applies the operator at positions `i` and `j` to a copy of `ordering`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    pub fn apply<T: Clone>(self, ordering: &[T], i: usize, j: usize) -> Vec<T> {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let mut out = ordering.to_vec();
        match self {
            Perturbation::SegmentReverse => out[lo..=hi].reverse(),
            Perturbation::SegmentRelocate => out[lo..=hi].rotate_right(1),
            Perturbation::PairwiseSwap => out.swap(lo, hi),
        }
        out
    }
}

/// Draws two distinct positions uniformly without replacement from `[0, n)`.
///
/// Consumes exactly two draws from `rng`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn draw_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const BASE: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];

    #[test]
    fn test_segment_reverse() {
        let out = Perturbation::SegmentReverse.apply(&BASE, 4, 1);
        assert_eq!(out, vec!['a', 'e', 'd', 'c', 'b', 'f']);
    }

    #[test]
    fn test_segment_relocate_rotates_by_one() {
        let out = Perturbation::SegmentRelocate.apply(&BASE, 1, 4);
        assert_eq!(out, vec!['a', 'e', 'b', 'c', 'd', 'f']);

        // Same result regardless of argument order.
        assert_eq!(Perturbation::SegmentRelocate.apply(&BASE, 4, 1), out);
    }

    #[test]
    fn test_segment_relocate_matches_index_rule() {
        let (i, j) = (0, 5);
        let out = Perturbation::SegmentRelocate.apply(&BASE, i, j);
        for t in 0..BASE.len() {
            let expected = if t == i {
                BASE[j]
            } else if (i..=j).contains(&t) {
                BASE[t - 1]
            } else {
                BASE[t]
            };
            assert_eq!(out[t], expected, "position {t}");
        }
    }

    #[test]
    fn test_pairwise_swap() {
        let out = Perturbation::PairwiseSwap.apply(&BASE, 5, 0);
        assert_eq!(out, vec!['f', 'b', 'c', 'd', 'e', 'a']);
    }

    #[test]
    fn test_adjacent_positions_coincide() {
        // For j = i + 1 all three operators exchange the two items.
        let expected = vec!['a', 'b', 'd', 'c', 'e', 'f'];
        for op in Perturbation::ALL {
            assert_eq!(op.apply(&BASE, 2, 3), expected, "{}", op.name());
        }
    }

    #[test]
    fn test_input_untouched() {
        let original = BASE.to_vec();
        let _ = Perturbation::SegmentReverse.apply(&original, 0, 5);
        assert_eq!(original, BASE.to_vec());
    }

    #[test]
    fn test_index_matches_all() {
        for (k, op) in Perturbation::ALL.iter().enumerate() {
            assert_eq!(op.index(), k);
        }
    }

    #[test]
    fn test_draw_pair_distinct_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [[false; 4]; 4];
        for _ in 0..2000 {
            let (i, j) = draw_pair(4, &mut rng);
            assert_ne!(i, j);
            assert!(i < 4 && j < 4);
            seen[i][j] = true;
        }
        // Every ordered off-diagonal pair shows up.
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(seen[i][j], i != j, "pair ({i}, {j})");
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_draw_pair_rejects_single_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        draw_pair(1, &mut rng);
    }

    fn sorted(mut v: Vec<u16>) -> Vec<u16> {
        v.sort_unstable();
        v
    }

    proptest! {
        #[test]
        fn prop_operators_preserve_multiset(
            items in proptest::collection::vec(0u16..50, 2..40),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let i = a.index(items.len());
            let j = b.index(items.len());
            prop_assume!(i != j);

            for op in Perturbation::ALL {
                let out = op.apply(&items, i, j);
                prop_assert_eq!(out.len(), items.len());
                prop_assert_eq!(sorted(out), sorted(items.clone()));
            }
        }

        #[test]
        fn prop_operators_leave_outside_untouched(
            items in proptest::collection::vec(any::<u16>(), 2..40),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let i = a.index(items.len());
            let j = b.index(items.len());
            prop_assume!(i != j);
            let (lo, hi) = (i.min(j), i.max(j));

            for op in Perturbation::ALL {
                let out = op.apply(&items, i, j);
                for t in (0..lo).chain(hi + 1..items.len()) {
                    prop_assert_eq!(out[t], items[t]);
                }
            }
        }
    }
}
