//! Generic algorithms over half-open cursor ranges `[first, last)`.
//!
//! The algorithms only rely on the [RandomAccessCursor] contract, so they work with forward as well as reverse cursors.
//! Passing cursors over different sequences is a precondition violation and panics.

use crate::cursor::RandomAccessCursor;
use crate::range::CursorRange;
use std::cmp::Ordering;
use std::ops::Deref;

/// Calls `f` on each element in `[first, last)`, in order.
pub fn for_each<C: RandomAccessCursor, F: FnMut(C::Reference)>(first: C, last: C, f: F) {
    CursorRange::new(first, last).for_each(f);
}

/// Clones the elements in `[first, last)` into a `Vec`.
pub fn copy_range<C: RandomAccessCursor>(first: C, last: C) -> Vec<C::Item>
where
    C::Item: Clone,
{
    let mut result = Vec::with_capacity(last.distance(&first).max(0) as usize);
    for_each(first, last, |item| result.push(item.deref().clone()));
    result
}

/// Returns a cursor to the first element in `[first, last)` that equals `item`, or `last` if there is none.
pub fn find<C: RandomAccessCursor>(mut first: C, last: C, item: &C::Item) -> C
where
    C::Item: PartialEq,
{
    while first < last {
        if first.value().deref() == item {
            return first;
        }
        first = first.advance(1);
    }
    last
}

/// Returns the number of elements in `[first, last)` that equal `item`.
pub fn count<C: RandomAccessCursor>(first: C, last: C, item: &C::Item) -> usize
where
    C::Item: PartialEq,
{
    CursorRange::new(first, last)
        .filter(|reference| reference.deref() == item)
        .count()
}

/// Returns true if both ranges have the same length and are element-wise equal.
pub fn equal<C1: RandomAccessCursor, C2: RandomAccessCursor>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
) -> bool
where
    C1::Item: PartialEq<C2::Item>,
{
    if last1.distance(&first1) != last2.distance(&first2) {
        return false;
    }
    CursorRange::new(first1, last1)
        .zip(CursorRange::new(first2, last2))
        .all(|(a, b)| a.deref() == b.deref())
}

/// Compares both ranges lexicographically.
/// The first mismatching element decides, and if one range is a prefix of the other, the shorter one orders first.
/// Returns `None` if two elements are incomparable.
pub fn lexicographical_partial_compare<C1: RandomAccessCursor, C2: RandomAccessCursor>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
) -> Option<Ordering>
where
    C1::Item: PartialOrd<C2::Item>,
{
    let mut range1 = CursorRange::new(first1, last1);
    let mut range2 = CursorRange::new(first2, last2);
    loop {
        match (range1.next(), range2.next()) {
            (Some(a), Some(b)) => match a.deref().partial_cmp(b.deref()) {
                Some(Ordering::Equal) => {}
                non_equal => return non_equal,
            },
            (Some(_), None) => return Some(Ordering::Greater),
            (None, Some(_)) => return Some(Ordering::Less),
            (None, None) => return Some(Ordering::Equal),
        }
    }
}

/// Compares both ranges lexicographically, see [lexicographical_partial_compare].
pub fn lexicographical_compare<C: RandomAccessCursor>(
    first1: C,
    last1: C,
    first2: C,
    last2: C,
) -> Ordering
where
    C::Item: Ord,
{
    let mut range1 = CursorRange::new(first1, last1);
    let mut range2 = CursorRange::new(first2, last2);
    loop {
        match (range1.next(), range2.next()) {
            (Some(a), Some(b)) => match a.deref().cmp(b.deref()) {
                Ordering::Equal => {}
                non_equal => return non_equal,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Returns true if the elements in `[first, last)` are sorted in non-decreasing order.
pub fn is_sorted<C: RandomAccessCursor>(first: C, last: C) -> bool
where
    C::Item: PartialOrd,
{
    let range = CursorRange::new(first, last);
    range
        .zip(range.skip(1))
        .all(|(a, b)| a.deref() <= b.deref())
}

/// Returns a cursor to the first element in the sorted range `[first, last)` that is not less than `item`,
/// or `last` if there is none.
///
/// ```rust
/// use traitcontainer::algorithm::lower_bound;
/// use traitcontainer::interface::Sequence;
///
/// let sequence = vec![1, 3, 3, 5];
/// let position = lower_bound(sequence.begin(), sequence.end(), &3);
/// assert_eq!(sequence.index_of(position).unwrap(), 1);
/// ```
pub fn lower_bound<C: RandomAccessCursor>(mut first: C, last: C, item: &C::Item) -> C
where
    C::Item: PartialOrd,
{
    let mut count = last.distance(&first);
    while count > 0 {
        let step = count / 2;
        let middle = first.advance(step);
        if middle.value().deref() < item {
            first = middle.advance(1);
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::reverse_cursor::ReverseCursor;

    fn bounds<T>(store: &[T]) -> (Cursor<T>, Cursor<T>) {
        (Cursor::begin_of(store), Cursor::end_of(store))
    }

    #[test]
    fn test_for_each_and_copy() {
        let store = [3, 1, 2];
        let (first, last) = bounds(&store);
        let mut sum = 0;
        for_each(first, last, |item| sum += *item);
        assert_eq!(sum, 6);
        assert_eq!(copy_range(first + 1, last), vec![1, 2]);
        assert_eq!(
            copy_range(ReverseCursor::new(last), ReverseCursor::new(first)),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_find_and_count() {
        let store = [1, 2, 1, 3];
        let (first, last) = bounds(&store);
        assert_eq!(find(first, last, &1), first);
        assert_eq!(find(first + 1, last, &1), first + 2);
        assert_eq!(find(first, last, &9), last);
        assert_eq!(count(first, last, &1), 2);
        assert_eq!(count(first, last, &9), 0);
    }

    #[test]
    fn test_equal() {
        let a = [1, 2, 3];
        let b = vec![1, 2, 3];
        let c = [1, 2];
        let (a1, a2) = bounds(&a);
        let (b1, b2) = bounds(&b);
        let (c1, c2) = bounds(&c);
        assert!(equal(a1, a2, b1, b2));
        assert!(!equal(a1, a2, c1, c2));
        assert!(equal(a1, a1 + 2, c1, c2));
    }

    #[test]
    fn test_lexicographical_compare() {
        let a = [1, 2, 3];
        let b = [1, 2, 3, 4];
        let c = [1, 3];
        let (a1, a2) = bounds(&a);
        let (b1, b2) = bounds(&b);
        let (c1, c2) = bounds(&c);
        assert_eq!(lexicographical_compare(a1, a2, b1, b2), Ordering::Less);
        assert_eq!(lexicographical_compare(b1, b2, a1, a2), Ordering::Greater);
        assert_eq!(lexicographical_compare(a1, a2, a1, a2), Ordering::Equal);
        assert_eq!(lexicographical_compare(c1, c2, b1, b2), Ordering::Greater);
        assert_eq!(
            lexicographical_partial_compare(a1, a2, c1, c2),
            Some(Ordering::Less)
        );

        let floats = [1.0, f64::NAN];
        let (f1, f2) = bounds(&floats);
        assert_eq!(lexicographical_partial_compare(f1, f2, f1, f2), None);
    }

    #[test]
    fn test_sorted_and_lower_bound() {
        let store = [1, 2, 2, 4, 7];
        let (first, last) = bounds(&store);
        assert!(is_sorted(first, last));
        assert!(!is_sorted(ReverseCursor::new(last), ReverseCursor::new(first)));
        assert!(is_sorted(first, first));
        assert_eq!(lower_bound(first, last, &2), first + 1);
        assert_eq!(lower_bound(first, last, &3), first + 3);
        assert_eq!(lower_bound(first, last, &0), first);
        assert_eq!(lower_bound(first, last, &8), last);
    }
}
