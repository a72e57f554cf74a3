//! Content equality and lexicographic ordering between spans.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use contig_span::{Fixed, Span, SpanMut};
use pretty_assertions::assert_eq;

// =============================================================================
// Helpers
// =============================================================================

/// Checks every derived operator against `<` on the pair.
fn assert_identities<T: PartialOrd>(a: Span<'_, T>, b: Span<'_, T>) {
    assert_eq!(a <= b, !(b < a));
    assert_eq!(a > b, b < a);
    assert_eq!(a >= b, !(a < b));
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn equal_contents_at_different_addresses() {
    let a = vec![1, 2, 3];
    let b = [1, 2, 3];
    assert!(Span::new(&a) == Span::new(&b));
    assert!(!(Span::new(&a) != Span::new(&b)));
}

#[test]
fn length_difference_is_inequality() {
    let a = [1, 2, 3];
    let b = [1, 2];
    assert!(Span::new(&a) != Span::new(&b));
    assert!(Span::new(&b) != Span::new(&a));
}

#[test]
fn empty_spans_are_equal() {
    let a: [u8; 0] = [];
    let empty = Span::<'_, u8>::empty();
    assert_eq!(Span::new(&a), empty);
    assert!(!(empty < Span::new(&a)));
}

#[test]
fn extent_does_not_affect_equality() {
    let a = [4, 5];
    let b = vec![4, 5];
    let fixed: Span<'_, i32, Fixed<2>> = Span::from(&a);
    let dynamic = Span::new(&b);
    assert_eq!(fixed, dynamic);
    assert_eq!(dynamic, fixed);
}

#[test]
fn mutable_and_shared_spans_compare() {
    let a = [1, 2, 3];
    let mut b = [1, 2, 3];
    let shared = Span::new(&a);
    let unique = SpanMut::new(&mut b);
    assert_eq!(shared, unique);
    assert!(!(unique < shared));
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn lexicographic_scenarios() {
    let (a, b) = ([1, 2], [1, 3]);
    assert!(Span::new(&a) < Span::new(&b));
    assert!(Span::new(&b) > Span::new(&a));

    let (prefix, longer) = ([1], [1, 2]);
    assert!(Span::new(&prefix) < Span::new(&longer));
    assert!(Span::new(&prefix) <= Span::new(&longer));

    let (big_head, long_tail) = ([2], [1, 9, 9, 9]);
    assert!(Span::new(&big_head) > Span::new(&long_tail));
}

#[test]
fn ordering_is_consistent_with_slices() {
    let words: [&[u8]; 6] = [b"", b"a", b"ab", b"abc", b"b", b"ba"];
    for x in words {
        for y in words {
            let (a, b) = (Span::new(x), Span::new(y));
            assert_eq!(a < b, x < y, "{x:?} < {y:?}");
            assert_eq!(a == b, x == y, "{x:?} == {y:?}");
            assert_eq!(a.cmp(&b), x.cmp(y));
            assert_identities(a, b);
        }
    }
}

#[test]
fn partial_order_elements() {
    let nan = [1.0, f64::NAN];
    let one = [1.0, 2.0];
    let (a, b) = (Span::new(&nan), Span::new(&one));

    // No pair is strictly ordered and the lengths match.
    assert!(!(a < b));
    assert!(!(b < a));
    assert!(a != b);
    assert_eq!(a.partial_cmp(&b), None);
    assert_identities(a, b);

    // A strictly ordered pair before the NaN still decides.
    let smaller = [0.5, f64::NAN];
    assert!(Span::new(&smaller) < a);
}

#[test]
fn spans_sort_like_slices() {
    let rows = [[3, 1], [1, 2], [1, 1], [2, 9]];
    let mut spans: Vec<Span<'_, i32>> = rows.iter().map(|row| Span::new(row)).collect();
    spans.sort();
    let sorted: Vec<Vec<i32>> = spans.iter().map(|s| s.to_vec()).collect();
    assert_eq!(sorted, vec![vec![1, 1], vec![1, 2], vec![2, 9], vec![3, 1]]);
}

// =============================================================================
// Hashing
// =============================================================================

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_views_hash_like_slices() {
    let a = [7u16, 8, 9];
    let mut b = [7u16, 8, 9];
    let shared = Span::new(&a);
    let fixed: Span<'_, u16, Fixed<3>> = Span::from(&a);
    let expected = hash_of(&a[..]);
    assert_eq!(hash_of(&shared), expected);
    assert_eq!(hash_of(&fixed), expected);
    assert_eq!(hash_of(&SpanMut::new(&mut b)), expected);
}

#[test]
fn views_key_hash_sets() {
    let rows = [[1, 2], [3, 4], [1, 2]];
    let unique: HashSet<Span<'_, i32>> = rows.iter().map(|row| Span::new(row)).collect();
    assert_eq!(unique.len(), 2);
    assert!(unique.contains(&Span::new(&[3, 4])));
}
