use crate::cursor::{Cursor, RandomAccessCursor};
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::ops::{Add, AddAssign, Deref, Index, Sub, SubAssign};

/// A cursor that walks a store backwards.
///
/// It wraps a base [Cursor] and dereferences to the element one before the base position.
/// Hence the reverse cursor over the end of a sequence points at its last element,
/// and the reverse cursor over the begin of a sequence is the reversed one-past-end position.
///
/// ```rust
/// use traitcontainer::cursor::Cursor;
/// use traitcontainer::reverse_cursor::ReverseCursor;
///
/// let store = [1, 2, 3];
/// let rbegin = ReverseCursor::new(Cursor::end_of(&store[..]));
/// assert_eq!(*rbegin, 3);
/// assert_eq!(*(rbegin + 2), 1);
/// ```
pub struct ReverseCursor<'a, T> {
    base: Cursor<'a, T>,
}

impl<'a, T> ReverseCursor<'a, T> {
    /// Creates a reverse cursor from the given base cursor.
    pub fn new(base: Cursor<'a, T>) -> Self {
        Self { base }
    }

    /// Returns the underlying cursor, which points one after the element this reverse cursor refers to.
    pub fn base(&self) -> Cursor<'a, T> {
        self.base
    }

    /// Returns a reference to the element this reverse cursor refers to,
    /// or `None` if there is no such element.
    pub fn get(&self) -> Option<&'a T> {
        self.base.retreat(1).get()
    }

    /// Returns a reference to the element this reverse cursor refers to.
    /// Panics if there is no such element.
    pub fn value(&self) -> &'a T {
        match self.get() {
            Some(item) => item,
            None => panic!("Dereferenced reverse cursor {:?} that does not point at an element.", self),
        }
    }

    /// Returns a reference to the element `n` positions after this reverse cursor, in reverse direction.
    pub fn nth(&self, n: isize) -> &'a T {
        self.advance(n).value()
    }

    /// Returns a reverse cursor moved by `n` positions in reverse direction.
    pub fn advance(self, n: isize) -> Self {
        Self::new(self.base.retreat(n))
    }

    /// Returns a reverse cursor moved by `n` positions against the reverse direction.
    pub fn retreat(self, n: isize) -> Self {
        Self::new(self.base.advance(n))
    }

    /// Moves this reverse cursor one position forward in reverse direction and returns the moved cursor.
    pub fn increment(&mut self) -> Self {
        self.base.decrement();
        *self
    }

    /// Moves this reverse cursor one position backward in reverse direction and returns the moved cursor.
    pub fn decrement(&mut self) -> Self {
        self.base.increment();
        *self
    }

    /// Like [increment](ReverseCursor::increment), but returns the cursor as it was before the move.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.base.decrement();
        previous
    }

    /// Like [decrement](ReverseCursor::decrement), but returns the cursor as it was before the move.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.base.increment();
        previous
    }

    /// Returns the signed number of elements from `origin` to `self` in reverse direction,
    /// or `None` if the cursors do not share a store.
    pub fn try_distance(&self, origin: &Self) -> Option<isize> {
        origin.base.try_distance(&self.base)
    }

    /// Returns the signed number of elements from `origin` to `self` in reverse direction.
    /// Panics if the cursors do not share a store.
    pub fn distance(&self, origin: &Self) -> isize {
        origin.base.distance(&self.base)
    }

    /// Compares the positions of both reverse cursors, in reverse direction.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        other.base.compare(&self.base)
    }
}

impl<'a, T> RandomAccessCursor for ReverseCursor<'a, T> {
    type Item = T;
    type Reference = &'a T;

    fn get(&self) -> Option<&'a T> {
        ReverseCursor::get(self)
    }

    fn advance(self, n: isize) -> Self {
        ReverseCursor::advance(self, n)
    }

    fn try_distance(&self, origin: &Self) -> Option<isize> {
        ReverseCursor::try_distance(self, origin)
    }

    fn is_within_bounds(&self) -> bool {
        self.base.is_within_bounds()
    }
}

impl<'a, T> Clone for ReverseCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ReverseCursor<'a, T> {}

impl<'a, T> Default for ReverseCursor<'a, T> {
    fn default() -> Self {
        Self::new(Cursor::null())
    }
}

impl<'a, T> Debug for ReverseCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reverse{:?}", self.base)
    }
}

impl<'a, T> Deref for ReverseCursor<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

impl<'a, T> Index<isize> for ReverseCursor<'a, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.nth(n)
    }
}

impl<'a, T> Add<isize> for ReverseCursor<'a, T> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        self.advance(n)
    }
}

impl<'a, T> Sub<isize> for ReverseCursor<'a, T> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        self.retreat(n)
    }
}

impl<'a, T> Sub for ReverseCursor<'a, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

impl<'a, T> AddAssign<isize> for ReverseCursor<'a, T> {
    fn add_assign(&mut self, n: isize) {
        self.base -= n;
    }
}

impl<'a, T> SubAssign<isize> for ReverseCursor<'a, T> {
    fn sub_assign(&mut self, n: isize) {
        self.base += n;
    }
}

impl<'a, T> PartialEq for ReverseCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<'a, T> Eq for ReverseCursor<'a, T> {}

impl<'a, T> PartialOrd for ReverseCursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl<'a, T> From<Cursor<'a, T>> for ReverseCursor<'a, T> {
    fn from(base: Cursor<'a, T>) -> Self {
        Self::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::ReverseCursor;
    use crate::cursor::Cursor;

    #[test]
    fn test_reverse_walk() {
        let store = [10, 20, 30];
        let mut rbegin = ReverseCursor::new(Cursor::end_of(&store[..]));
        let rend = ReverseCursor::new(Cursor::begin_of(&store[..]));

        assert_eq!(rend - rbegin, 3);
        assert_eq!(*rbegin, 30);
        assert_eq!(rbegin[1], 20);
        assert_eq!(*rbegin.increment(), 20);
        assert_eq!(*rbegin.post_increment(), 20);
        assert_eq!(*rbegin, 10);
        assert_eq!(rbegin.increment(), rend);
        assert_eq!(rend.get(), None);
    }

    #[test]
    fn test_reverse_ordering() {
        let store = [1, 2, 3, 4];
        let rbegin = ReverseCursor::new(Cursor::end_of(&store[..]));
        let later = rbegin + 2;

        assert!(rbegin < later);
        assert!(later > rbegin);
        assert_eq!(later - 2, rbegin);
        assert_eq!(later.base(), Cursor::begin_of(&store[..]) + 2);
        assert_eq!(*later, 2);
    }

    #[test]
    fn test_assign_operators() {
        let store = [1, 2, 3, 4];
        let mut cursor = ReverseCursor::new(Cursor::end_of(&store[..]));
        cursor += 3;
        assert_eq!(*cursor, 1);
        cursor -= 2;
        assert_eq!(*cursor, 3);
        assert_eq!(*cursor.post_decrement(), 3);
        assert_eq!(*cursor, 4);
        assert_eq!(*cursor.increment(), 3);
        assert_eq!(*cursor.decrement(), 4);
    }

    #[test]
    #[should_panic]
    fn test_dereference_rend_panics() {
        let store = [1];
        let _value: i32 = *ReverseCursor::new(Cursor::begin_of(&store[..]));
    }
}
