use crate::algorithm;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, Result};
use crate::range::CursorRange;
use crate::reverse_cursor::ReverseCursor;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::{Debug, Write};
use std::ops::{Index, IndexMut};

/// A type behaving like a contiguous sequence container over the type `Item`.
///
/// Implementors only expose their contiguous backing store via [as_slice](Sequence::as_slice),
/// everything else is derived from the [Cursor]s bounding that store.
/// The unchecked element access is the `Index<usize>` supertrait, i.e. `sequence[index]`,
/// which panics on an out-of-range index. The checked access is [at](Sequence::at).
pub trait Sequence<Item>: Index<usize, Output = Item> {
    /// Returns the contiguous backing store of this sequence.
    fn as_slice(&self) -> &[Item];

    /// Returns a cursor to the first element of the sequence.
    fn begin(&self) -> Cursor<'_, Item> {
        Cursor::begin_of(self.as_slice())
    }

    /// Returns a cursor one past the last element of the sequence.
    fn end(&self) -> Cursor<'_, Item> {
        Cursor::end_of(self.as_slice())
    }

    /// Same as [begin](Sequence::begin), the cursor never allows mutation.
    fn cbegin(&self) -> Cursor<'_, Item> {
        self.begin()
    }

    /// Same as [end](Sequence::end), the cursor never allows mutation.
    fn cend(&self) -> Cursor<'_, Item> {
        self.end()
    }

    /// Returns a reverse cursor to the last element of the sequence.
    fn rbegin(&self) -> ReverseCursor<'_, Item> {
        ReverseCursor::new(self.end())
    }

    /// Returns a reverse cursor one before the first element of the sequence.
    fn rend(&self) -> ReverseCursor<'_, Item> {
        ReverseCursor::new(self.begin())
    }

    /// Same as [rbegin](Sequence::rbegin).
    fn crbegin(&self) -> ReverseCursor<'_, Item> {
        self.rbegin()
    }

    /// Same as [rend](Sequence::rend).
    fn crend(&self) -> ReverseCursor<'_, Item> {
        self.rend()
    }

    /// Returns an iterator over the sequence.
    fn iter(&self) -> CursorRange<Cursor<'_, Item>> {
        CursorRange::new(self.begin(), self.end())
    }

    /// Returns an iterator over the sequence in reverse order.
    fn iter_rev(&self) -> CursorRange<ReverseCursor<'_, Item>> {
        CursorRange::new(self.rbegin(), self.rend())
    }

    /// Returns the number of elements in the sequence.
    fn length(&self) -> usize {
        self.end().distance(&self.begin()) as usize
    }

    /// Same as [length](Sequence::length).
    fn len(&self) -> usize {
        self.length()
    }

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Returns true if the sequence has at least one element.
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the element at the given index.
    ///
    /// ```rust
    /// use traitcontainer::interface::Sequence;
    /// use traitcontainer::ErrorKind;
    ///
    /// let sequence = vec![10, 20, 30];
    /// assert_eq!(*sequence.at(2).unwrap(), 30);
    /// assert!(matches!(sequence.at(3).unwrap_err().kind(), ErrorKind::OutOfRange(3, 3)));
    /// ```
    fn at(&self, index: usize) -> Result<&Item> {
        let length = self.length();
        if index >= length {
            debug!("Rejected access at index {} of sequence with length {}", index, length);
            return Err(ErrorKind::OutOfRange(index, length).into());
        }
        Ok(self.get_unchecked_index(index))
    }

    /// Returns the element at the given index without reporting an error, i.e. `sequence[index]`.
    /// Panics if `index >= length()`.
    fn get_unchecked_index(&self, index: usize) -> &Item {
        &self[index]
    }

    /// Returns a cursor to the element at the given index, i.e. `begin() + index`.
    /// The index is not checked, the returned cursor is only dereferenceable if `index < length()`.
    fn iterator_at(&self, index: usize) -> Cursor<'_, Item> {
        self.begin() + index as isize
    }

    /// Returns the first element of the sequence.
    fn front(&self) -> Result<&Item> {
        if self.is_empty() {
            debug!("Rejected access to the front of an empty sequence");
            return Err(ErrorKind::EmptyContainer.into());
        }
        Ok(self.begin().value())
    }

    /// Returns the last element of the sequence.
    fn back(&self) -> Result<&Item> {
        if self.is_empty() {
            debug!("Rejected access to the back of an empty sequence");
            return Err(ErrorKind::EmptyContainer.into());
        }
        Ok((self.end() - 1).value())
    }

    /// Returns `Ok` if the given cursor lies within `[begin(), end()]` of this sequence.
    ///
    /// The cursor must be bound to exactly this sequence's store, a cursor into an enclosing or
    /// overlapping view of the same memory is rejected.
    /// Stores are told apart by address and length only. Distinct empty sequences and sequences
    /// of zero-sized items may share a dangling address, so their cursors are accepted by each other.
    fn check_if_valid(&self, cursor: Cursor<'_, Item>) -> Result<()> {
        let (begin, end) = (self.begin(), self.end());
        trace!("Validating {:?} against [{:?}, {:?}]", cursor, begin, end);
        if !cursor.shares_store_with(&begin) || cursor.is_null() || cursor < begin || cursor > end {
            debug!("Rejected {:?}, it does not belong to the sequence", cursor);
            return Err(ErrorKind::InvalidCursor(cursor.offset()).into());
        }
        Ok(())
    }

    /// Returns the index of the given cursor in this sequence, i.e. `cursor - begin()`.
    /// The one-past-end cursor has index `length()`.
    fn index_of(&self, cursor: Cursor<'_, Item>) -> Result<usize> {
        self.check_if_valid(cursor)?;
        Ok(cursor.distance(&self.begin()) as usize)
    }

    /// Returns true if this sequence contains the given item.
    fn contains(&self, item: &Item) -> bool
    where
        Item: PartialEq,
    {
        algorithm::find(self.begin(), self.end(), item) != self.end()
    }

    /// Converts the sequence to a string using the debug formatting of the items.
    ///
    /// ```rust
    /// use traitcontainer::interface::Sequence;
    ///
    /// let sequence = [0, 2, 1];
    /// assert_eq!(sequence.to_debug_string(), "[0, 2, 1]".to_string());
    ///
    /// let sequence = ["a", "c", "b"];
    /// assert_eq!(sequence.to_debug_string(), "[\"a\", \"c\", \"b\"]".to_string());
    /// ```
    fn to_debug_string(&self) -> String
    where
        Item: Debug,
    {
        let mut result = String::new();
        write!(result, "[").unwrap();
        let mut once = true;
        for item in self.iter() {
            if once {
                once = false;
            } else {
                write!(result, ", ").unwrap();
            }
            write!(result, "{:?}", item).unwrap();
        }
        write!(result, "]").unwrap();
        result
    }

    /// Returns true if both sequences have the same length and are element-wise equal.
    fn sequence_eq<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialEq,
    {
        algorithm::equal(self.begin(), self.end(), other.begin(), other.end())
    }

    /// Returns true if the sequences are not [equal](Sequence::sequence_eq).
    fn sequence_ne<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialEq,
    {
        !self.sequence_eq(other)
    }

    /// Compares both sequences lexicographically, returning `None` if two elements are incomparable.
    fn sequence_partial_cmp<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> Option<Ordering>
    where
        Item: PartialOrd,
    {
        algorithm::lexicographical_partial_compare(self.begin(), self.end(), other.begin(), other.end())
    }

    /// Compares both sequences lexicographically.
    /// The first mismatching element decides, and if one sequence is a prefix of the other, the shorter one orders first.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use traitcontainer::interface::Sequence;
    ///
    /// assert_eq!(vec![1, 2, 3].sequence_cmp(&[1, 2, 3, 4]), Ordering::Less);
    /// ```
    fn sequence_cmp<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> Ordering
    where
        Item: Ord,
    {
        algorithm::lexicographical_compare(self.begin(), self.end(), other.begin(), other.end())
    }

    /// Returns true if this sequence orders lexicographically before the other.
    fn sequence_lt<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialOrd,
    {
        self.sequence_partial_cmp(other) == Some(Ordering::Less)
    }

    /// Returns true if this sequence orders lexicographically before or equal to the other.
    fn sequence_le<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialOrd,
    {
        matches!(
            self.sequence_partial_cmp(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns true if this sequence orders lexicographically after the other.
    fn sequence_gt<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialOrd,
    {
        self.sequence_partial_cmp(other) == Some(Ordering::Greater)
    }

    /// Returns true if this sequence orders lexicographically after or equal to the other.
    fn sequence_ge<Other: Sequence<Item> + ?Sized>(&self, other: &Other) -> bool
    where
        Item: PartialOrd,
    {
        matches!(
            self.sequence_partial_cmp(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

/// A type behaving like a mutable sequence over the type `Item`.
/// That is, its items can be mutated, but the sequence it self can not.
/// For a sequence where items can be appended or removed see [EditableSequence].
pub trait SequenceMut<Item>: Sequence<Item> + IndexMut<usize, Output = Item> {
    /// Returns the contiguous backing store of this sequence mutably.
    fn as_mut_slice(&mut self) -> &mut [Item];

    /// Returns the element at the given index mutably.
    fn at_mut(&mut self, index: usize) -> Result<&mut Item> {
        let length = self.length();
        match self.as_mut_slice().get_mut(index) {
            Some(item) => Ok(item),
            None => {
                debug!("Rejected mutable access at index {} of sequence with length {}", index, length);
                Err(ErrorKind::OutOfRange(index, length).into())
            }
        }
    }

    /// Returns the element at the given index mutably, i.e. `&mut sequence[index]`.
    /// Panics if `index >= length()`.
    fn get_unchecked_index_mut(&mut self, index: usize) -> &mut Item {
        &mut self[index]
    }

    /// Returns the first element of the sequence mutably.
    fn front_mut(&mut self) -> Result<&mut Item> {
        self.as_mut_slice()
            .first_mut()
            .ok_or_else(|| ErrorKind::EmptyContainer.into())
    }

    /// Returns the last element of the sequence mutably.
    fn back_mut(&mut self) -> Result<&mut Item> {
        self.as_mut_slice()
            .last_mut()
            .ok_or_else(|| ErrorKind::EmptyContainer.into())
    }

    /// Sorts the sequence in non-decreasing order.
    fn sort(&mut self)
    where
        Item: Ord,
    {
        self.as_mut_slice().sort();
    }

    /// Sorts the sequence with the given comparator.
    fn sort_by<Comparator: FnMut(&Item, &Item) -> Ordering>(&mut self, comparator: Comparator) {
        self.as_mut_slice().sort_by(comparator);
    }

    /// Reverses the order of the elements in the sequence.
    fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Overwrites every element of the sequence with a clone of `item`.
    fn fill(&mut self, item: Item)
    where
        Item: Clone,
    {
        self.as_mut_slice().fill(item);
    }
}

/// A type behaving like a sequence over the type `Item` that can be edited.
/// Editing may reallocate the backing store, which the borrow checker enforces by
/// rejecting edits while cursors into the sequence are alive.
pub trait EditableSequence<Item>: SequenceMut<Item> + Extend<Item> {
    /// Removes all elements from the sequence.
    /// The capacity of the backing store is kept.
    fn clear(&mut self);

    /// Appends an item to the end of the sequence.
    fn push(&mut self, item: Item);

    /// Returns the number of elements the sequence can hold without reallocating.
    fn capacity(&self) -> usize {
        self.length()
    }

    /// Extend this sequence from a sequence of compatible items.
    fn extend_into<
        ExtensionItem: Into<Item>,
        ExtensionSource: IntoIterator<Item = ExtensionItem>,
    >(
        &mut self,
        extension: ExtensionSource,
    ) {
        self.extend(extension.into_iter().map(Into::into));
    }
}

/// Returns true if both sequences have the same length and are element-wise equal.
/// The sequences may be of different container types.
pub fn equals<Item: PartialEq, A: Sequence<Item> + ?Sized, B: Sequence<Item> + ?Sized>(
    a: &A,
    b: &B,
) -> bool {
    a.sequence_eq(b)
}

/// Compares two sequences of possibly different container types lexicographically.
pub fn compare<Item: Ord, A: Sequence<Item> + ?Sized, B: Sequence<Item> + ?Sized>(
    a: &A,
    b: &B,
) -> Ordering {
    a.sequence_cmp(b)
}
