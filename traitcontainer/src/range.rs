use crate::cursor::{Cursor, RandomAccessCursor};
use std::iter::FusedIterator;

/// An iterator over the half-open range `[front, back)` of two cursors over the same sequence.
///
/// Works with any [RandomAccessCursor], so the same type iterates forwards over [Cursor]s
/// and backwards over [ReverseCursor](crate::reverse_cursor::ReverseCursor)s.
#[derive(Clone, Copy, Debug)]
pub struct CursorRange<C> {
    front: C,
    back: C,
}

impl<C: RandomAccessCursor> CursorRange<C> {
    /// Creates a range from `first` up to but excluding `last`.
    /// Panics if either cursor lies outside of its sequence.
    pub fn new(first: C, last: C) -> Self {
        assert!(
            first.is_within_bounds() && last.is_within_bounds(),
            "Created a cursor range with a bound outside of its sequence."
        );
        debug_assert!(first.try_distance(&last).is_some());
        Self {
            front: first,
            back: last,
        }
    }

    /// The cursor to the next element yielded from the front.
    pub fn front_cursor(&self) -> C {
        self.front
    }

    /// The cursor one past the next element yielded from the back.
    pub fn back_cursor(&self) -> C {
        self.back
    }

    fn remaining(&self) -> usize {
        self.back
            .try_distance(&self.front)
            .map_or(0, |distance| distance.max(0) as usize)
    }
}

impl<'a, T> CursorRange<Cursor<'a, T>> {
    /// Returns the remaining elements of this range as a slice of the backing store.
    /// The slice never extends past the store the front cursor is bound to.
    pub fn as_slice(&self) -> &'a [T] {
        match (self.front.store(), self.front.offset()) {
            (Some(store), Some(front)) => {
                let clamp = |offset: isize| offset.clamp(0, store.len() as isize) as usize;
                let back = front + self.remaining() as isize;
                &store[clamp(front)..clamp(back)]
            }
            _ => &[],
        }
    }
}

impl<C: RandomAccessCursor> Iterator for CursorRange<C> {
    type Item = C::Reference;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let item = self.front.value();
        self.front = self.front.advance(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back;
            return None;
        }
        self.front = self.front.advance(n as isize);
        self.next()
    }
}

impl<C: RandomAccessCursor> DoubleEndedIterator for CursorRange<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        self.back = self.back.retreat(1);
        Some(self.back.value())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for CursorRange<C> {}

impl<C: RandomAccessCursor> FusedIterator for CursorRange<C> {}

#[cfg(test)]
mod tests {
    use super::CursorRange;
    use crate::cursor::Cursor;
    use crate::reverse_cursor::ReverseCursor;

    #[test]
    fn test_forward_and_backward() {
        let store = [1, 2, 3, 4];
        let range = CursorRange::new(Cursor::begin_of(&store[..]), Cursor::end_of(&store[..]));
        assert_eq!(range.len(), 4);
        assert_eq!(range.copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(range.rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

        let mut range = range;
        assert_eq!(range.next(), Some(&1));
        assert_eq!(range.next_back(), Some(&4));
        assert_eq!(range.as_slice(), &[2, 3]);
        assert_eq!(range.nth(1), Some(&3));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn test_reverse_cursor_range() {
        let store = ['a', 'b', 'c'];
        let range = CursorRange::new(
            ReverseCursor::new(Cursor::end_of(&store[..])),
            ReverseCursor::new(Cursor::begin_of(&store[..])),
        );
        assert_eq!(range.collect::<String>(), "cba");
    }

    #[test]
    fn test_null_range_is_empty() {
        let mut range = CursorRange::new(Cursor::<u8>::null(), Cursor::null());
        assert_eq!(range.len(), 0);
        assert_eq!(range.next(), None);
        assert!(range.as_slice().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_bound_before_begin_panics() {
        let store = [1, 2, 3];
        let _range = CursorRange::new(Cursor::begin_of(&store[..]) - 1, Cursor::end_of(&store[..]));
    }

    #[test]
    #[should_panic]
    fn test_reverse_bound_past_end_panics() {
        let store = [1, 2, 3];
        let _range = CursorRange::new(
            ReverseCursor::new(Cursor::end_of(&store[..]) + 1),
            ReverseCursor::new(Cursor::begin_of(&store[..])),
        );
    }

    #[test]
    fn test_range_over_views_of_one_store() {
        let store = [1, 2, 3, 4];
        let range = CursorRange::new(Cursor::begin_of(&store[1..]), Cursor::end_of(&store[..3]));
        assert_eq!(range.len(), 2);
        assert_eq!(range.as_slice(), &[2, 3]);
        assert_eq!(range.copied().collect::<Vec<_>>(), vec![2, 3]);

        let range = CursorRange::new(Cursor::begin_of(&store[2..]), Cursor::end_of(&store[..]));
        assert_eq!(range.as_slice(), &[3, 4]);
    }

    #[test]
    fn test_nth_past_end() {
        let store = [1, 2];
        let mut range = CursorRange::new(Cursor::begin_of(&store[..]), Cursor::end_of(&store[..]));
        assert_eq!(range.nth(5), None);
        assert_eq!(range.next(), None);
    }
}
