use crate::interface::{Sequence, SequenceMut};

impl<Item, const N: usize> Sequence<Item> for [Item; N] {
    fn as_slice(&self) -> &[Item] {
        &self[..]
    }
}

impl<Item, const N: usize> SequenceMut<Item> for [Item; N] {
    fn as_mut_slice(&mut self) -> &mut [Item] {
        &mut self[..]
    }
}
