//! # Singly Linked Lists
//!
//! An owned singly linked list in two flavors that share one chain
//! representation:
//!
//! - [`list::UnorderedList`]: `add` prepends, so traversal yields values in
//!   reverse chronological order of insertion.
//! - [`list::OrderedList`]: `add` splices at the sort position, keeping the
//!   chain non-decreasing and letting `search` stop at the first strictly
//!   greater value.
//!
//! ## Core Components
//!
//! - [`chain::Chain`]: the raw chain of box-owned nodes and every structural
//!   operation (length, positional insert, removal by value, tail pop,
//!   traversal). Ordering-agnostic.
//! - [`placement`]: the [`placement::Placement`] strategy that decides how
//!   `add` places a value and how `search` walks the chain. Two zero-sized
//!   strategies, [`placement::Insertion`] and [`placement::Sorted`], cover
//!   the two flavors with static dispatch.
//! - [`list::LinkedList`]: the public type, a chain paired with a placement
//!   strategy.
//!
//! ## Ownership
//!
//! Each node exclusively owns its successor and the list owns the head, so
//! a node is reachable through exactly one path and dropping the list drops
//! the whole chain. Nodes are never shared between lists.
//!
//! # Examples
//!
//! ```
//! use linear_collections::linked_list::list::{OrderedList, UnorderedList};
//!
//! let mut recents: UnorderedList<i32> = UnorderedList::new();
//! recents.add(1);
//! recents.add(2);
//! recents.add(3);
//! assert_eq!(recents.view(), vec![3, 2, 1]);
//! assert_eq!(recents.pop(), Ok(1));
//!
//! let mut ranked: OrderedList<i32> = OrderedList::new();
//! ranked.add(5);
//! ranked.add(1);
//! ranked.add(3);
//! assert_eq!(ranked.view(), vec![1, 3, 5]);
//! assert!(ranked.search(&3));
//! assert!(!ranked.search(&4));
//! ```

pub mod chain;
pub mod iter;
pub mod list;
pub mod placement;

mod node;

#[cfg(test)]
mod tests;
