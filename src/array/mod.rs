//! # Array-Backed Structures
//!
//! Thin wrappers over a contiguous growable buffer, with no dependency on
//! the linked list core:
//!
//! - [`stack::Stack`]: LIFO, with paired-symbol checking and number-base
//!   conversion built on top.
//! - [`queue::Queue`]: FIFO, with a hot-potato elimination round built on
//!   top.
//! - [`deque::Deque`]: double-ended, with a palindrome check built on top.
//!
//! # Examples
//!
//! ```
//! use linear_collections::array::deque::is_palindrome;
//! use linear_collections::array::stack::{Stack, is_balanced};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//!
//! assert!(is_balanced("{{([][])}()}"));
//! assert!(is_palindrome("radar"));
//! ```

pub mod deque;
pub mod queue;
pub mod stack;
