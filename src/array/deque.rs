use alloc::vec::Vec;

use crate::error::{CollectionError, Result};

/// An array-backed double-ended queue. The front is the end of the buffer
/// and the rear is index 0, so the front operations are O(1) and the rear
/// operations shift the buffer.
pub struct Deque<T> {
    items: Vec<T>,
}

impl<T> Deque<T> {
    /// Creates a new, empty deque.
    pub const fn new() -> Self {
        Deque { items: Vec::new() }
    }

    /// Returns `true` if the deque has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds `item` at the front of the deque.
    pub fn add_front(&mut self, item: T) {
        self.items.push(item);
    }

    /// Adds `item` at the rear of the deque.
    pub fn add_rear(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Removes and returns the front item.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the deque is empty.
    pub fn remove_front(&mut self) -> Result<T> {
        self.items.pop().ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the rear item.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the deque is empty.
    pub fn remove_rear(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        Ok(self.items.remove(0))
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether `word` reads the same in both directions by stripping
/// matching characters from the two ends of a deque until at most one
/// remains.
pub fn is_palindrome(word: &str) -> bool {
    let mut characters = Deque::new();
    for character in word.chars() {
        characters.add_rear(character);
    }
    while characters.len() > 1 {
        if characters.remove_front() != characters.remove_rear() {
            return false;
        }
    }
    true
}
