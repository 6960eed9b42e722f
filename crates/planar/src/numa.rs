//! Sequence indexing.
//!
//! A [`Numa`] pairs a borrowed item with its position in the input sequence. Positions are the
//! only thing the crossing test looks at, so every edge endpoint is a `Numa`.

use std::fmt;

/// An item together with its 0-based position in the sequence.
///
/// Two numas are equal when they carry the same ordinal and point at the same item. Items are
/// never compared by value.
pub struct Numa<'a, T> {
    pub ordinal: usize,
    pub item: &'a T,
}

impl<'a, T> Numa<'a, T> {
    pub fn new(ordinal: usize, item: &'a T) -> Self {
        Self { ordinal, item }
    }
}

impl<T> Clone for Numa<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Numa<'_, T> {}

impl<T> PartialEq for Numa<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal && std::ptr::eq(self.item, other.item)
    }
}

impl<T> Eq for Numa<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Numa<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.ordinal, self.item)
    }
}

/// Assigns ordinals `0..items.len()` in input order.
pub fn index<T>(items: &[T]) -> Vec<Numa<'_, T>> {
    items
        .iter()
        .enumerate()
        .map(|(ordinal, item)| Numa { ordinal, item })
        .collect()
}
