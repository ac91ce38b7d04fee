use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use super::iter::Iter;
use super::node::Node;
use crate::error::{CollectionError, Result};

/// The raw chain shared by both list flavors.
///
/// Holds the head link and every structural operation: the operations here
/// are ordering-agnostic, so [`UnorderedList`](super::list::UnorderedList)
/// and [`OrderedList`](super::list::OrderedList) reuse them unchanged.
///
/// There is no cached length. `len` always counts reachable nodes, so it
/// cannot drift from the chain itself.
///
/// Every mutation walks a `&mut Option<Box<Node<T>>>` cursor to the link it
/// needs to rewrite and splices by moving boxes. The spliced node is moved,
/// never copied, and failures are detected before any link is rewritten.
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Chain<T> {
    /// Creates a new, empty chain.
    pub const fn new() -> Self {
        Chain { head: None }
    }

    /// Returns `true` if the chain has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Links a new node in front of the current head. O(1).
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Splices a new node at its sort position, keeping the chain
    /// non-decreasing.
    ///
    /// The cursor advances past every value less than or equal to `value`,
    /// so a new value lands after existing equal values: relative insertion
    /// order among equal keys is preserved.
    pub fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.head;
        // Re-derive the cursor inside the body; binding the node in a
        // guarded match arm would hold the borrow into the exit arm.
        while link.as_ref().is_some_and(|node| node.value <= value) {
            link = &mut link.as_mut().expect("loop condition saw a node").next;
        }
        let mut node = Box::new(Node::new(value));
        node.next = link.take();
        *link = Some(node);
    }

    /// Returns `true` if any node holds `value`. Scans until a match or the
    /// end of the chain.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|held| held == value)
    }

    /// Returns `true` if any node holds `value`, assuming the chain is
    /// non-decreasing.
    ///
    /// Stops at the first value strictly greater than `value`; sortedness
    /// makes scanning the remainder pointless.
    pub fn contains_sorted(&self, value: &T) -> bool
    where
        T: Ord,
    {
        for held in self.iter() {
            if held == value {
                return true;
            }
            if held > value {
                return false;
            }
        }
        false
    }

    /// Unlinks the first node holding `value` and returns the value.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the chain is exhausted without a match; the
    /// chain is left untouched in that case.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return Err(CollectionError::NotFound),
                Some(node) if node.value == *value => break,
                Some(node) => link = &mut node.next,
            }
        }
        // `link` now holds the matching node.
        let node = *link.take().ok_or(CollectionError::NotFound)?;
        *link = node.next;
        Ok(node.value)
    }

    /// Returns the 0-based position of the first node holding `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|held| held == value)
    }

    /// Unlinks the last node and returns its value.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the chain has no nodes.
    pub fn pop_back(&mut self) -> Result<T> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.next.is_some()) {
            link = &mut link.as_mut().expect("loop condition saw a node").next;
        }
        // The tail node's next is already none, so nothing to reattach.
        let node = *link.take().ok_or(CollectionError::EmptyCollection)?;
        Ok(node.value)
    }

    /// Splices a new node in so it becomes the node at `pos`, shifting the
    /// rest of the chain one position later.
    ///
    /// Position 0 rewires the head link itself, so inserting before every
    /// existing node (or into an empty chain) never touches a previous
    /// node. Position `len` appends at the tail.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `pos > len`, before any link is rewritten.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        let len = self.len();
        if pos > len {
            return Err(CollectionError::OutOfRange { pos, len });
        }
        let mut link = &mut self.head;
        for _ in 0..pos {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(CollectionError::OutOfRange { pos, len }),
            }
        }
        let mut node = Box::new(Node::new(value));
        node.next = link.take();
        *link = Some(node);
        Ok(())
    }

    /// Returns a forward iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Collects the values head to tail into a buffer, without mutating the
    /// chain.
    pub fn view(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Unlink node by node so dropping a long chain cannot recurse
        // through every `next` box.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
