use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::ops::{Add, AddAssign, Deref, Index, Sub, SubAssign};

/// The random-access cursor contract that generic algorithms are written against.
///
/// A cursor is a cheap, copyable position into some sequence.
/// It can be moved by arbitrary offsets and two cursors over the same sequence have a signed distance.
/// Moving a cursor out of its sequence is allowed, only dereferencing it is not.
pub trait RandomAccessCursor: Copy + PartialOrd {
    /// The type of the elements the cursor points at.
    type Item;
    /// The reference type returned when dereferencing the cursor.
    type Reference: Deref<Target = Self::Item> + Copy;

    /// Returns a reference to the element at the position of this cursor,
    /// or `None` if the cursor is null or does not point at an element.
    fn get(&self) -> Option<Self::Reference>;

    /// Returns a reference to the element at the position of this cursor.
    /// Panics if the cursor is null or does not point at an element.
    fn value(&self) -> Self::Reference {
        match self.get() {
            Some(reference) => reference,
            None => panic!("Dereferenced a cursor that does not point at an element."),
        }
    }

    /// Returns a cursor moved by `n` positions, where `n` may be negative.
    fn advance(self, n: isize) -> Self;

    /// Returns a cursor moved by `-n` positions.
    fn retreat(self, n: isize) -> Self {
        self.advance(-n)
    }

    /// Returns the signed number of elements from `origin` to `self`,
    /// or `None` if the cursors do not belong to the same sequence.
    fn try_distance(&self, origin: &Self) -> Option<isize>;

    /// Returns true if the cursor lies between the begin and the one-past-end position of its sequence.
    fn is_within_bounds(&self) -> bool;

    /// Returns the signed number of elements from `origin` to `self`.
    /// Panics if the cursors do not belong to the same sequence.
    fn distance(&self, origin: &Self) -> isize {
        match self.try_distance(origin) {
            Some(distance) => distance,
            None => panic!("Computed the distance between cursors over different sequences."),
        }
    }
}

/// A random-access cursor over a contiguous store of elements.
///
/// The cursor is either null or bound to a store, in which case it holds a signed offset into it.
/// Offset `store.len()` is the one-past-end position.
/// The cursor does not own the store, it borrows it, so it cannot outlive the sequence it was derived from,
/// and the sequence cannot be mutated while the cursor is alive.
///
/// ```rust
/// use traitcontainer::cursor::Cursor;
///
/// let store = [10, 20, 30];
/// let mut cursor = Cursor::begin_of(&store[..]);
/// assert_eq!(*cursor, 10);
/// cursor += 2;
/// assert_eq!(cursor[0], 30);
/// assert_eq!(cursor[-1], 20);
/// assert_eq!(Cursor::end_of(&store[..]) - cursor, 1);
/// ```
pub struct Cursor<'a, T> {
    store: Option<&'a [T]>,
    offset: isize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a null cursor that is not bound to any store.
    pub fn null() -> Self {
        Self {
            store: None,
            offset: 0,
        }
    }

    /// Creates a cursor at the given offset into the given store.
    pub fn new(store: &'a [T], offset: isize) -> Self {
        Self {
            store: Some(store),
            offset,
        }
    }

    /// Creates a cursor pointing at the first element of the given store.
    pub fn begin_of(store: &'a [T]) -> Self {
        Self::new(store, 0)
    }

    /// Creates a cursor pointing one past the last element of the given store.
    pub fn end_of(store: &'a [T]) -> Self {
        Self::new(store, store.len() as isize)
    }

    /// Returns true if this cursor is not bound to any store.
    pub fn is_null(&self) -> bool {
        self.store.is_none()
    }

    /// Returns the offset of this cursor into its store, or `None` if the cursor is null.
    pub fn offset(&self) -> Option<isize> {
        self.store.map(|_| self.offset)
    }

    /// Returns the store this cursor is bound to.
    pub fn store(&self) -> Option<&'a [T]> {
        self.store
    }

    /// Returns true if the cursor points at an element, i.e. it is neither null nor outside of its store.
    pub fn is_dereferenceable(&self) -> bool {
        self.get().is_some()
    }

    /// Returns true if the cursor is null at offset zero, or bound and inside `[0, len]` of its store.
    pub fn is_within_bounds(&self) -> bool {
        match self.store {
            Some(store) => 0 <= self.offset && self.offset <= store.len() as isize,
            None => self.offset == 0,
        }
    }

    /// Returns true if both cursors are null or both are bound to the identical store,
    /// i.e. the same start address and the same length.
    pub fn shares_store_with(&self, other: &Self) -> bool {
        match (self.store, other.store) {
            (None, None) => true,
            (Some(store), Some(other_store)) => {
                std::ptr::eq(store.as_ptr(), other_store.as_ptr()) && store.len() == other_store.len()
            }
            _ => false,
        }
    }

    /// Returns true if both cursors are null, or both are bound to views of the same memory.
    /// Only such cursors are comparable.
    ///
    /// Two stores are views of the same memory if their address ranges overlap or touch
    /// and their start addresses are a whole number of elements apart.
    /// Hence a cursor into a sub-slice compares with a cursor into the enclosing slice by address.
    pub fn is_comparable_with(&self, other: &Self) -> bool {
        self.position_from(other).is_some()
    }

    /// The number of elements from `origin` to `self` measured by address.
    fn position_from(&self, origin: &Self) -> Option<isize> {
        match (self.store, origin.store) {
            (None, None) => Some(self.offset - origin.offset),
            (Some(store), Some(origin_store)) => {
                let start = store.as_ptr() as usize;
                let origin_start = origin_store.as_ptr() as usize;
                let end = start + std::mem::size_of_val(store);
                let origin_end = origin_start + std::mem::size_of_val(origin_store);
                if start > origin_end || origin_start > end {
                    return None;
                }

                // Zero-sized items all live at the same address.
                let size = std::mem::size_of::<T>() as isize;
                let store_distance = if size == 0 {
                    0
                } else {
                    let bytes = start as isize - origin_start as isize;
                    if bytes % size != 0 {
                        return None;
                    }
                    bytes / size
                };
                Some(store_distance + self.offset - origin.offset)
            }
            _ => None,
        }
    }

    /// Returns a reference to the element at the position of this cursor,
    /// or `None` if the cursor is null or does not point at an element.
    pub fn get(&self) -> Option<&'a T> {
        let store = self.store?;
        usize::try_from(self.offset)
            .ok()
            .and_then(|index| store.get(index))
    }

    /// Returns a reference to the element at the position of this cursor.
    /// Panics if the cursor is null or does not point at an element.
    pub fn value(&self) -> &'a T {
        match self.get() {
            Some(item) => item,
            None => panic!("Dereferenced cursor {:?} that does not point at an element.", self),
        }
    }

    /// Returns a reference to the element `n` positions after this cursor, i.e. `*(cursor + n)`.
    /// Panics if there is no such element.
    pub fn nth(&self, n: isize) -> &'a T {
        self.advance(n).value()
    }

    /// Returns a cursor moved by `n` positions, where `n` may be negative.
    pub fn advance(self, n: isize) -> Self {
        Self {
            store: self.store,
            offset: self.offset + n,
        }
    }

    /// Returns a cursor moved by `-n` positions.
    pub fn retreat(self, n: isize) -> Self {
        self.advance(-n)
    }

    /// Moves this cursor one position forward and returns the moved cursor.
    pub fn increment(&mut self) -> Self {
        self.offset += 1;
        *self
    }

    /// Moves this cursor one position backward and returns the moved cursor.
    pub fn decrement(&mut self) -> Self {
        self.offset -= 1;
        *self
    }

    /// Moves this cursor one position forward and returns the cursor as it was before the move.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.offset += 1;
        previous
    }

    /// Moves this cursor one position backward and returns the cursor as it was before the move.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.offset -= 1;
        previous
    }

    /// Returns the signed number of elements from `origin` to `self`,
    /// or `None` if the cursors are not [comparable](Cursor::is_comparable_with).
    pub fn try_distance(&self, origin: &Self) -> Option<isize> {
        self.position_from(origin)
    }

    /// Returns the signed number of elements from `origin` to `self`.
    /// Panics if the cursors are not comparable.
    pub fn distance(&self, origin: &Self) -> isize {
        match self.try_distance(origin) {
            Some(distance) => distance,
            None => panic!(
                "Computed the distance between cursors {:?} and {:?} over different stores.",
                self, origin
            ),
        }
    }

    /// Compares the positions of both cursors.
    /// Returns `None` if the cursors are not comparable.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.position_from(other).map(|distance| distance.cmp(&0))
    }

    /// Returns the raw address of the position of this cursor, or a null pointer if the cursor is null.
    /// The pointer may only be dereferenced if the cursor [is dereferenceable](Cursor::is_dereferenceable).
    pub fn as_ptr(&self) -> *const T {
        match self.store {
            Some(store) => store.as_ptr().wrapping_offset(self.offset),
            None => std::ptr::null(),
        }
    }
}

impl<'a, T> RandomAccessCursor for Cursor<'a, T> {
    type Item = T;
    type Reference = &'a T;

    fn get(&self) -> Option<&'a T> {
        Cursor::get(self)
    }

    fn advance(self, n: isize) -> Self {
        Cursor::advance(self, n)
    }

    fn try_distance(&self, origin: &Self) -> Option<isize> {
        Cursor::try_distance(self, origin)
    }

    fn is_within_bounds(&self) -> bool {
        Cursor::is_within_bounds(self)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Default for Cursor<'a, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.store {
            Some(store) => write!(f, "Cursor({}/{})", self.offset, store.len()),
            None => write!(f, "Cursor(null)"),
        }
    }
}

impl<'a, T> Deref for Cursor<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

impl<'a, T> Index<isize> for Cursor<'a, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.nth(n)
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        self.advance(n)
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        self.retreat(n)
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

impl<'a, T> AddAssign<isize> for Cursor<'a, T> {
    fn add_assign(&mut self, n: isize) {
        self.offset += n;
    }
}

impl<'a, T> SubAssign<isize> for Cursor<'a, T> {
    fn sub_assign(&mut self, n: isize) {
        self.offset -= n;
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl<'a, T> PartialEq<*const T> for Cursor<'a, T> {
    fn eq(&self, other: &*const T) -> bool {
        self.as_ptr() == *other
    }
}

impl<'a, T> PartialOrd<*const T> for Cursor<'a, T> {
    fn partial_cmp(&self, other: &*const T) -> Option<Ordering> {
        Some(self.as_ptr().cmp(other))
    }
}

impl<'a, T> From<Cursor<'a, T>> for *const T {
    fn from(cursor: Cursor<'a, T>) -> Self {
        cursor.as_ptr()
    }
}
