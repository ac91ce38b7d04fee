//! # Linear Collections
//!
//! In-memory linear collections built on owned storage.
//!
//! ## Modules
//!
//! - [`linked_list`]: singly linked lists over box-owned nodes, in an
//!   insertion-ordered and a value-ordered flavor that share one chain
//!   representation.
//! - [`array`]: thin stack, queue, and deque wrappers over a contiguous
//!   growable buffer, independent of the linked list core.
//! - [`error`]: the failure taxonomy shared by every fallible operation.
//!
//! The crate is `no_std` + `alloc`. Nothing here is thread safe; a
//! collection instance is owned and mutated by one logical thread of
//! control, and callers that share one must serialize access externally.
#![no_std]

extern crate alloc;

pub mod array;
pub mod error;
pub mod linked_list;

pub use error::{CollectionError, Result};
