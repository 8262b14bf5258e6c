use crate::interface::{EditableSequence, Sequence, SequenceMut};
use log::debug;

impl<Item> Sequence<Item> for Vec<Item> {
    fn as_slice(&self) -> &[Item] {
        Vec::as_slice(self)
    }
}

impl<Item> SequenceMut<Item> for Vec<Item> {
    fn as_mut_slice(&mut self) -> &mut [Item] {
        Vec::as_mut_slice(self)
    }
}

impl<Item> EditableSequence<Item> for Vec<Item> {
    fn clear(&mut self) {
        debug!("Clearing vector of length {} and capacity {}", self.len(), Vec::capacity(self));
        Vec::clear(self)
    }

    fn push(&mut self, item: Item) {
        Vec::push(self, item)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::interface::{EditableSequence, Sequence};

    fn refill<S: EditableSequence<u32>>(sequence: &mut S, items: &[u32]) {
        sequence.clear();
        for item in items {
            sequence.push(*item);
        }
    }

    #[test]
    fn test_clear_then_push_starts_fresh() {
        let mut sequence = vec![1, 2, 3];
        assert_eq!(sequence.length(), 3);
        refill(&mut sequence, &[]);
        assert_eq!(sequence.length(), 0);
        assert!(!sequence.is_not_empty());
        assert!(sequence.at(0).is_err());

        refill(&mut sequence, &[7]);
        assert_eq!(sequence.to_debug_string(), "[7]");
        assert_eq!(*sequence.back().unwrap(), 7);
        assert!(sequence.at(1).is_err());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut sequence: Vec<u32> = Vec::with_capacity(16);
        sequence.extend_into(vec![1u8, 2, 3]);
        EditableSequence::clear(&mut sequence);
        assert!(EditableSequence::capacity(&sequence) >= 16);
    }
}
