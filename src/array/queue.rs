use alloc::vec::Vec;

use crate::error::{CollectionError, Result};

/// An array-backed FIFO queue. The rear is index 0 and the front is the
/// end of the buffer, so enqueue shifts the buffer and dequeue is O(1).
pub struct Queue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue { items: Vec::new() }
    }

    /// Returns `true` if the queue has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds `item` at the rear of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Removes and returns the front item.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop().ok_or(CollectionError::EmptyCollection)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays a round of hot potato: the potato changes hands `passes` times,
/// then the holder leaves the circle, until one player remains.
///
/// Returns `None` if there are no players.
pub fn hot_potato<T: Clone>(players: &[T], passes: usize) -> Option<T> {
    let mut circle = Queue::new();
    for player in players {
        circle.enqueue(player.clone());
    }
    while circle.len() > 1 {
        for _ in 0..passes {
            let holder = circle.dequeue().ok()?;
            circle.enqueue(holder);
        }
        circle.dequeue().ok()?;
    }
    circle.dequeue().ok()
}
