//! Observer, access and sub-view properties checked over a range of inputs.

use contig_span::{DYNAMIC_EXTENT, Fixed, Span, SpanMut};
use pretty_assertions::assert_eq;

// =============================================================================
// Helpers
// =============================================================================

/// Inputs of every length from 0 to 8, with distinct elements.
fn inputs() -> impl Iterator<Item = Vec<u32>> {
    (0..=8u32).map(|n| (0..n).map(|i| i * 10 + 1).collect())
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn size_and_bytes_follow_the_source() {
    for v in inputs() {
        let span = Span::new(&v);
        assert_eq!(span.len(), v.len());
        assert_eq!(span.is_empty(), v.is_empty());
        assert_eq!(span.size_bytes(), v.len() * size_of::<u32>());
    }
}

#[test]
fn indexing_matches_source() {
    for v in inputs().filter(|v| !v.is_empty()) {
        let span = Span::new(&v);
        for (i, x) in v.iter().enumerate() {
            assert_eq!(span[i], *x);
        }
        assert_eq!(span.front(), &v[0]);
        assert_eq!(span.back(), &v[v.len() - 1]);
    }
}

#[test]
fn iteration_matches_source() {
    for v in inputs() {
        let span = Span::new(&v);
        assert_eq!(span.iter().copied().collect::<Vec<_>>(), v);
        let reversed: Vec<u32> = v.iter().rev().copied().collect();
        assert_eq!(span.iter_rev().copied().collect::<Vec<_>>(), reversed);
    }
}

// =============================================================================
// Sub-views
// =============================================================================

#[test]
fn subspan_elements_map_to_source() {
    for v in inputs() {
        let span = Span::new(&v);
        for offset in 0..=v.len() {
            for count in 0..=v.len() - offset {
                let sub = span.subspan(offset, count);
                assert_eq!(sub.len(), count);
                for k in 0..count {
                    assert_eq!(sub[k], v[offset + k]);
                }
            }
            assert_eq!(span.subspan(offset, DYNAMIC_EXTENT), &v[offset..]);
        }
    }
}

#[test]
fn first_and_last_are_subspans() {
    for v in inputs() {
        let span = Span::new(&v);
        let n = v.len();
        for k in 0..=n {
            assert_eq!(span.first(k), span.subspan(0, k));
            assert_eq!(span.last(k), span.subspan(n - k, k));
            assert_eq!(span.first(k).as_ptr(), span.as_ptr());
        }
    }
}

#[test]
fn split_at_covers_the_span() {
    for v in inputs() {
        let span = Span::new(&v);
        for mid in 0..=v.len() {
            let (head, tail) = span.split_at(mid);
            assert_eq!(head, span.first(mid));
            assert_eq!(tail, span.subspan_from(mid));
        }
    }
}

#[test]
fn sub_views_of_mutable_spans_match_shared_ones() {
    for mut v in inputs() {
        let expected = v.clone();
        let n = v.len();
        let mut span = SpanMut::new(&mut v);
        for k in 0..=n {
            assert_eq!(span.reborrow().first(k), &expected[..k]);
            assert_eq!(span.reborrow().last(k), &expected[n - k..]);
        }
    }
}

#[test]
fn fixed_sub_views_agree_with_dynamic_ones() {
    let data = [1, 2, 3, 4, 5, 6];
    let fixed = Span::<'_, i32, Fixed<6>>::from_array(&data);
    let dynamic = Span::new(&data);

    assert_eq!(fixed.first_fixed::<3>(), dynamic.first(3));
    assert_eq!(fixed.last_fixed::<2>(), dynamic.last(2));
    assert_eq!(fixed.subspan_fixed::<2, 3>(), dynamic.subspan(2, 3));
    assert_eq!(fixed.subspan_to_end::<4, 2>(), dynamic.subspan_from(4));
    assert_eq!(fixed.first_fixed::<0>().len(), 0);
    assert_eq!(fixed.subspan_fixed::<6, 0>().len(), 0);
}

// =============================================================================
// Checked access
// =============================================================================

#[cfg(feature = "extensions")]
#[test]
fn at_accepts_exactly_the_valid_indices() {
    for v in inputs() {
        let span = Span::new(&v);
        for i in 0..v.len() {
            assert_eq!(span.at(i), Ok(&v[i]));
        }
        let err = span.at(v.len()).unwrap_err();
        assert_eq!((err.index, err.len), (v.len(), v.len()));
        assert_eq!(
            err.to_string(),
            format!("index {} is out of range for span of size {}", v.len(), v.len())
        );
    }
}

#[cfg(all(feature = "extensions", feature = "alloc"))]
#[test]
fn free_functions_match_methods() {
    use contig_span::{first, last, subspan};

    for v in inputs() {
        let n = v.len();
        for k in 0..=n {
            assert_eq!(first(&v, k), Span::new(&v).first(k));
            assert_eq!(last(&v, k), Span::new(&v).last(k));
            assert_eq!(subspan(&v, n - k, DYNAMIC_EXTENT), Span::new(&v).last(k));
        }
    }
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
#[should_panic]
fn front_of_empty_panics() {
    let v: Vec<u8> = Vec::new();
    let _ = Span::new(&v).front();
}

#[test]
#[should_panic]
fn index_past_end_panics() {
    let v = vec![1, 2, 3];
    let _element = Span::new(&v)[3];
}

#[test]
#[should_panic]
fn subspan_offset_past_end_panics() {
    let v = vec![1, 2, 3];
    let _ = Span::new(&v).subspan(4, DYNAMIC_EXTENT);
}

#[test]
#[should_panic]
fn subspan_count_past_end_panics() {
    let v = vec![1, 2, 3];
    let _ = Span::new(&v).subspan(1, 3);
}
