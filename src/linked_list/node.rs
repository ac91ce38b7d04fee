use alloc::boxed::Box;

/// A single value holder in a chain.
///
/// A node exclusively owns its successor, so once it is linked into a chain
/// it has exactly one owner: the previous node, or the chain head. Kept
/// crate-private so no node can be shared between lists.
pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(super) fn new(value: T) -> Self {
        Self { value, next: None }
    }
}
