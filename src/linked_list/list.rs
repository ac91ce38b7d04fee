use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use super::chain::Chain;
use super::iter::Iter;
use super::placement::{Insertion, Placement, Sorted};
use crate::error::Result;

/// A singly linked list whose placement strategy is fixed at the type
/// level.
///
/// The two flavors differ only in `add` and `search`; every structural
/// operation delegates to the shared [`Chain`] unchanged.
pub struct LinkedList<T, P: Placement<T>> {
    chain: Chain<T>,
    _placement: PhantomData<P>,
}

/// An insertion-ordered list: `add` prepends, so traversal yields values
/// in reverse chronological order of insertion.
pub type UnorderedList<T> = LinkedList<T, Insertion>;

/// A value-ordered list: `add` keeps the chain non-decreasing (stable
/// among equal values) and `search` exploits sortedness to stop early.
pub type OrderedList<T> = LinkedList<T, Sorted>;

impl<T, P: Placement<T>> LinkedList<T, P> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList {
            chain: Chain::new(),
            _placement: PhantomData,
        }
    }

    /// Returns `true` if the list has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the number of values in the list, by traversal.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Adds `value` at the position the placement strategy picks: the head
    /// for [`UnorderedList`], the sort position for [`OrderedList`].
    pub fn add(&mut self, value: T) {
        P::place(&mut self.chain, value);
    }

    /// Reports whether the list holds `value`, walking the chain the way
    /// the placement strategy arranged it.
    pub fn search(&self, value: &T) -> bool {
        P::contains(&self.chain, value)
    }

    /// Removes the first occurrence of `value` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no node holds `value`; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        self.chain.remove(value)
    }

    /// Returns the 0-based position of the first occurrence of `value`,
    /// or `None` if absent.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.position(value)
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the list is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.chain.pop_back()
    }

    /// Inserts `value` so it becomes the value at `pos`, shifting the rest
    /// of the list one position later. `pos == len()` appends at the tail.
    ///
    /// On an [`OrderedList`] this bypasses the placement strategy; the
    /// caller is responsible for picking a position that keeps the list
    /// sorted if later `search` calls are to stay correct.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `pos > len()`; the list is unchanged.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        self.chain.insert(pos, value)
    }

    /// Returns a forward iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Collects the values head to tail, without mutating the list.
    pub fn view(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.chain.view()
    }
}

impl<T, P: Placement<T>> Default for LinkedList<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Placement<T>> fmt::Debug for LinkedList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chain.fmt(f)
    }
}

impl<T, P: Placement<T>> FromIterator<T> for LinkedList<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        for value in values {
            list.add(value);
        }
        list
    }
}

impl<'a, T, P: Placement<T>> IntoIterator for &'a LinkedList<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
