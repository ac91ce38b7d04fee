extern crate std;

use std::vec;
use std::vec::Vec;

use crate::error::CollectionError;
use crate::linked_list::list::UnorderedList;

#[test]
fn test_new_is_empty() {
    let list: UnorderedList<i32> = UnorderedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.view(), Vec::<i32>::new());
}

#[test]
fn test_add_prepends() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    assert_eq!(list.len(), 3);
    // Most recently added first.
    assert_eq!(list.view(), vec![3, 2, 1]);
}

#[test]
fn test_len_tracks_adds() {
    let mut list = UnorderedList::new();
    for k in 1..=10 {
        list.add(k);
        assert_eq!(list.len(), k as usize);
    }
}

#[test]
fn test_search() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    assert!(list.search(&1));
    assert!(list.search(&3));
    assert!(!list.search(&72));
}

#[test]
fn test_remove_then_search_misses() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    assert_eq!(list.remove(&2), Ok(2));
    assert!(!list.search(&2));
    assert_eq!(list.view(), vec![3, 1]);
}

#[test]
fn test_remove_absent_leaves_list_unchanged() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    assert_eq!(list.remove(&9), Err(CollectionError::NotFound));
    assert_eq!(list.len(), 2);
    assert_eq!(list.view(), vec![2, 1]);
}

#[test]
fn test_remove_on_empty_list_fails() {
    let mut list: UnorderedList<i32> = UnorderedList::new();
    assert_eq!(list.remove(&1), Err(CollectionError::NotFound));
}

#[test]
fn test_position() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    // head-to-tail view is [3, 2, 1]
    assert_eq!(list.position(&3), Some(0));
    assert_eq!(list.position(&1), Some(2));
    assert_eq!(list.position(&9), None);
}

#[test]
fn test_pop_returns_tail() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.view(), vec![3, 2]);
}

#[test]
fn test_pop_on_empty_list_fails() {
    let mut list: UnorderedList<i32> = UnorderedList::new();
    assert_eq!(list.pop(), Err(CollectionError::EmptyCollection));
}

#[test]
fn test_insert_at_head_of_empty_list() {
    let mut list = UnorderedList::new();
    list.insert(0, 42).unwrap();
    assert_eq!(list.view(), vec![42]);
}

#[test]
fn test_insert_at_head_of_nonempty_list() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.insert(0, 42).unwrap();
    assert_eq!(list.view(), vec![42, 2, 1]);
}

#[test]
fn test_insert_mid_chain() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    list.add(3);
    list.insert(1, 10).unwrap();
    assert_eq!(list.position(&10), Some(1));
    assert_eq!(list.view(), vec![3, 10, 2, 1]);
}

#[test]
fn test_insert_at_len_appends_at_tail() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    // `add` prepends, so appending is the opposite end.
    list.insert(list.len(), 42).unwrap();
    assert_eq!(list.view(), vec![2, 1, 42]);
    assert_eq!(list.pop(), Ok(42));
}

#[test]
fn test_insert_past_len_fails() {
    let mut list = UnorderedList::new();
    list.add(1);
    assert_eq!(
        list.insert(2, 42),
        Err(CollectionError::OutOfRange { pos: 2, len: 1 })
    );
    assert_eq!(list.view(), vec![1]);
}

#[test]
fn test_debug_renders_head_to_tail() {
    let mut list = UnorderedList::new();
    list.add(1);
    list.add(2);
    assert_eq!(std::format!("{list:?}"), "[2, 1]");
}

#[test]
fn test_iter_and_from_iter() {
    let list: UnorderedList<i32> = (1..=3).collect();
    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![3, 2, 1]);
    let borrowed: Vec<i32> = (&list).into_iter().copied().collect();
    assert_eq!(borrowed, values);
}
