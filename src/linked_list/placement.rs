use super::chain::Chain;

/// A placement strategy for a linked list.
///
/// `add` and `search` are the only list operations that depend on how
/// values are arranged; everything else is structural and lives on
/// [`Chain`]. A strategy decides where `place` splices a new value and how
/// `contains` walks the chain, and is selected at the type level so there
/// is no virtual dispatch.
pub trait Placement<T> {
    /// Splices `value` into the chain at the strategy's position.
    fn place(chain: &mut Chain<T>, value: T);

    /// Reports whether the chain holds `value`, walking it the way the
    /// strategy arranged it.
    fn contains(chain: &Chain<T>, value: &T) -> bool;
}

/// Insertion-order placement.
///
/// `place` prepends in O(1), so traversal yields values most recently
/// added first. `contains` has no arrangement to exploit and scans the
/// whole chain.
pub struct Insertion;

impl<T: PartialEq> Placement<T> for Insertion {
    fn place(chain: &mut Chain<T>, value: T) {
        chain.push_front(value);
    }

    fn contains(chain: &Chain<T>, value: &T) -> bool {
        chain.contains(value)
    }
}

/// Comparison-order placement.
///
/// `place` keeps the chain non-decreasing, landing new values after
/// existing equal ones. `contains` stops at the first value strictly
/// greater than the target.
pub struct Sorted;

impl<T: Ord> Placement<T> for Sorted {
    fn place(chain: &mut Chain<T>, value: T) {
        chain.insert_sorted(value);
    }

    fn contains(chain: &Chain<T>, value: &T) -> bool {
        chain.contains_sorted(value)
    }
}
