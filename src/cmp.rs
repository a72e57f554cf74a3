//! Equality and lexicographic ordering between spans.
//!
//! Spans compare by content, never by address. Spans over different element
//! types compare when the elements do, and the extent never matters.
//!
//! `<` is the lexicographic comparison; `<=`, `>` and `>=` are derived from it
//! (`a <= b` is `!(b < a)` and so on) so the four operators agree even when
//! the element order is partial.

use core::cmp::Ordering;

use crate::{Extent, Span, SpanMut};

/// Returns `true` if both runs have the same length and equal elements.
pub(crate) fn equal<T: PartialEq<U>, U>(lhs: &[T], rhs: &[U]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    for (a, b) in lhs.iter().zip(rhs) {
        if a != b {
            return false;
        }
    }
    true
}

/// Lexicographic `lhs < rhs`.
///
/// The first element pair that is strictly ordered decides. If none is, the
/// shorter run is the lesser.
pub(crate) fn less<T: PartialOrd<U>, U>(lhs: &[T], rhs: &[U]) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if a < b {
            return true;
        }
        if a > b {
            return false;
        }
    }
    lhs.len() < rhs.len()
}

fn partial_cmp<T, U>(lhs: &[T], rhs: &[U]) -> Option<Ordering>
where
    T: PartialOrd<U>,
    U: PartialOrd<T>,
{
    if less(lhs, rhs) {
        Some(Ordering::Less)
    } else if less(rhs, lhs) {
        Some(Ordering::Greater)
    } else if equal(lhs, rhs) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Implements equality and ordering of `$lhs` against `$rhs`, both span types.
macro_rules! span_cmp {
    ($lhs:ident, $rhs:ident) => {
        impl<'a, 'b, T, U, E, F> PartialEq<$rhs<'b, U, F>> for $lhs<'a, T, E>
        where
            T: PartialEq<U>,
            E: Extent,
            F: Extent,
        {
            fn eq(&self, other: &$rhs<'b, U, F>) -> bool {
                equal(self.as_slice(), other.as_slice())
            }
        }

        impl<'a, 'b, T, U, E, F> PartialOrd<$rhs<'b, U, F>> for $lhs<'a, T, E>
        where
            T: PartialOrd<U>,
            U: PartialOrd<T>,
            E: Extent,
            F: Extent,
        {
            fn partial_cmp(&self, other: &$rhs<'b, U, F>) -> Option<Ordering> {
                partial_cmp(self.as_slice(), other.as_slice())
            }

            fn lt(&self, other: &$rhs<'b, U, F>) -> bool {
                less(self.as_slice(), other.as_slice())
            }

            fn le(&self, other: &$rhs<'b, U, F>) -> bool {
                !less(other.as_slice(), self.as_slice())
            }

            fn gt(&self, other: &$rhs<'b, U, F>) -> bool {
                less(other.as_slice(), self.as_slice())
            }

            fn ge(&self, other: &$rhs<'b, U, F>) -> bool {
                !less(self.as_slice(), other.as_slice())
            }
        }
    };
}

span_cmp!(Span, Span);
span_cmp!(Span, SpanMut);
span_cmp!(SpanMut, Span);
span_cmp!(SpanMut, SpanMut);

/// Implements equality of a span type against arrays and slices.
macro_rules! span_eq_slice {
    ($span:ident) => {
        impl<T, U, E, const M: usize> PartialEq<[U; M]> for $span<'_, T, E>
        where
            T: PartialEq<U>,
            E: Extent,
        {
            fn eq(&self, other: &[U; M]) -> bool {
                equal(self.as_slice(), other)
            }
        }

        impl<T, U, E> PartialEq<[U]> for $span<'_, T, E>
        where
            T: PartialEq<U>,
            E: Extent,
        {
            fn eq(&self, other: &[U]) -> bool {
                equal(self.as_slice(), other)
            }
        }

        impl<T, U, E> PartialEq<&[U]> for $span<'_, T, E>
        where
            T: PartialEq<U>,
            E: Extent,
        {
            fn eq(&self, other: &&[U]) -> bool {
                equal(self.as_slice(), other)
            }
        }
    };
}

span_eq_slice!(Span);
span_eq_slice!(SpanMut);

impl<T: Eq, E: Extent> Eq for Span<'_, T, E> {}
impl<T: Eq, E: Extent> Eq for SpanMut<'_, T, E> {}

impl<T: Ord, E: Extent> Ord for Span<'_, T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Ord, E: Extent> Ord for SpanMut<'_, T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed;

    // ========
    // Equality
    // ========

    #[test]
    fn equal_requires_same_length() {
        assert!(equal(&[1, 2], &[1, 2]));
        assert!(!equal(&[1, 2], &[1, 2, 3]));
        assert!(!equal(&[1, 2], &[1, 3]));
        assert!(equal::<i32, i32>(&[], &[]));
    }

    #[test]
    fn equality_ignores_address() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        assert_eq!(Span::new(&a), Span::new(&b));
        assert!(!(Span::new(&a) < Span::new(&b)));
        assert!(!(Span::new(&b) < Span::new(&a)));
    }

    #[test]
    fn equality_across_extents() {
        let a = [1, 2, 3];
        let fixed = Span::<'_, i32, Fixed<3>>::from_array(&a);
        let dynamic = Span::new(&a[..]);
        assert!(fixed == dynamic);
        assert!(dynamic == fixed);
        assert!(fixed != dynamic.first(2));
    }

    #[test]
    fn equality_across_element_types() {
        #[derive(Debug)]
        struct Cents(i64);
        impl PartialEq<i64> for Cents {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        let cents = [Cents(5), Cents(10)];
        let raw = [5i64, 10];
        assert!(Span::new(&cents) == Span::new(&raw));
        assert!(Span::new(&cents) != Span::new(&raw[..1]));
    }

    // ========
    // Ordering
    // ========

    #[test]
    fn lexicographic_less() {
        assert!(less(&[1, 2], &[1, 3]));
        assert!(less(&[1], &[1, 2]));
        assert!(!less(&[1, 2], &[1, 2]));
        assert!(!less(&[2], &[1, 9, 9]));
        assert!(less::<i32, i32>(&[], &[0]));
    }

    #[test]
    fn derived_operators_follow_identities() {
        let cases: [(&[i32], &[i32]); 5] = [
            (&[1, 2], &[1, 3]),
            (&[1], &[1, 2]),
            (&[1, 2], &[1, 2]),
            (&[3], &[1, 2]),
            (&[], &[]),
        ];
        for (a, b) in cases {
            let (a, b) = (Span::new(a), Span::new(b));
            assert_eq!(a <= b, !(b < a));
            assert_eq!(a > b, b < a);
            assert_eq!(a >= b, !(a < b));
            assert_eq!(a.partial_cmp(&b), Some(a.cmp(&b)));
        }
    }

    #[test]
    fn partial_orders_use_identities() {
        let a = [f64::NAN];
        let b = [f64::NAN];
        let (a, b) = (Span::new(&a), Span::new(&b));
        assert!(!(a < b));
        assert!(!(a > b));
        assert!(a <= b);
        assert!(a >= b);
        assert!(a != b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn mixed_span_kinds_compare() {
        let a = [1, 2];
        let mut b = [1, 3];
        let shared = Span::new(&a);
        let unique = SpanMut::new(&mut b);
        assert!(shared < unique);
        assert!(unique > shared);
        assert!(unique != shared);
    }

    #[test]
    fn compares_with_arrays_and_slices() {
        let a = [1, 2, 3];
        let span = Span::new(&a);
        assert!(span == [1, 2, 3]);
        assert!(span == a[..]);
        assert!(span == &a[..]);
        assert!(span != [1, 2]);
    }
}
