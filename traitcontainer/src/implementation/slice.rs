use crate::interface::{Sequence, SequenceMut};

impl<Item> Sequence<Item> for [Item] {
    fn as_slice(&self) -> &[Item] {
        self
    }
}

impl<Item> SequenceMut<Item> for [Item] {
    fn as_mut_slice(&mut self) -> &mut [Item] {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::interface::{Sequence, SequenceMut};

    #[test]
    fn test_length() {
        let array = [0, 1, 2];
        let slice = &array[0..2];
        assert_eq!(2, Sequence::length(slice));
        assert_eq!(slice.end() - slice.begin(), 2);
    }

    #[test]
    fn test_subslice_is_its_own_sequence() {
        let array = [0, 1, 2, 3];
        let whole = &array[..];
        let tail = &array[1..];
        assert_eq!(*tail.front().unwrap(), 1);
        // Same address, but a cursor of the enclosing slice.
        assert_eq!(whole.begin() + 1, tail.begin());
        assert!(tail.index_of(whole.begin() + 1).is_err());
        assert_eq!(tail.index_of(tail.begin() + 1).unwrap(), 1);
    }

    #[test]
    fn test_mutable_slice() {
        let mut array = [3, 2, 1];
        let slice = &mut array[..];
        SequenceMut::sort(slice);
        *slice.back_mut().unwrap() = 4;
        assert_eq!(array, [1, 2, 4]);
    }
}
