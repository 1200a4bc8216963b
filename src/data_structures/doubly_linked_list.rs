//! Bidirectional list variant.
//!
//! Variables:
//!   head     : Option<NodeRef<T>>  - first node, None if empty
//!   max_iter : usize               - walk budget, default 99
//!
//! Equations:
//!   connect(a, b):  a.next = b  and  b.prev = a        O(1)
//!   predecessor(n): n.prev                             O(1)
//!   traverse(-k):   find tail, then k - 1 prev steps   O(N)
//!
//! The only structural difference from the singly variant is that
//! `connect` fixes both directions. On top of that the predecessor
//! lookup is O(1) and negative traversal finds the tail once, then backs
//! up through the back-references.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use super::linked_list::{
    chains_equal, chains_partial_cmp, format_chain, format_chain_debug, nth_from_front,
    LinkedList, ListError, Nodes, DEFAULT_MAX_ITER,
};
use super::node::{Node, NodeRef};

pub struct DoublyLinkedList<T> {
    head: Option<NodeRef<T>>,
    max_iter: usize,
}

impl<T> DoublyLinkedList<T> {
    /// An empty list with the default walk budget.
    pub fn new() -> Self {
        Self { head: None, max_iter: DEFAULT_MAX_ITER }
    }
}

impl<T> LinkedList<T> for DoublyLinkedList<T> {
    fn create_node(&self, value: T) -> NodeRef<T> {
        Node::new(value)
    }

    fn connect(&self, a: Option<&NodeRef<T>>, b: Option<&NodeRef<T>>) {
        if let Some(a) = a {
            a.set_next(b.cloned());
        }
        if let Some(b) = b {
            b.set_prev(a);
        }
    }

    fn head(&self) -> Option<NodeRef<T>> {
        self.head.clone()
    }

    fn set_head(&mut self, head: Option<NodeRef<T>>) {
        self.head = head;
    }

    fn max_iter(&self) -> usize {
        self.max_iter
    }

    fn set_max_iter(&mut self, limit: usize) {
        assert!(limit > 0, "walk budget must be positive");
        self.max_iter = limit;
    }

    fn predecessor(&self, node: &NodeRef<T>) -> Result<Option<NodeRef<T>>, ListError> {
        Ok(node.prev())
    }

    fn traverse(&self, index: isize) -> Result<NodeRef<T>, ListError> {
        if index >= 0 {
            return nth_from_front(self, index);
        }
        // Find the tail with one bounded forward pass, then back up.
        let mut length = 0usize;
        let mut tail: Option<NodeRef<T>> = None;
        for entry in self.nodes() {
            tail = Some(entry?);
            length += 1;
        }
        let back = index.unsigned_abs();
        let mut node = match tail {
            Some(tail) if back <= length => tail,
            _ => return Err(ListError::IndexOutOfRange { index, len: length }),
        };
        for _ in 1..back {
            node = node
                .prev()
                .ok_or(ListError::IndexOutOfRange { index, len: length })?;
        }
        Ok(node)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        chains_equal(self, other)
    }
}

impl<T: PartialOrd> PartialOrd for DoublyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        chains_partial_cmp(self, other)
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_chain(self, f, "DoublyLinkedList")
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_chain_debug(self, f, "DoublyLinkedList")
    }
}

impl<T> IntoIterator for &DoublyLinkedList<T> {
    type Item = Result<NodeRef<T>, ListError>;
    type IntoIter = Nodes<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// Concatenation by deep copy.
///
/// # Panics
/// Panics when a bounded walk over `self` faults; use
/// [`LinkedList::concat`] to handle the error instead.
impl<T: Clone> Add for &DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn add(self, other: Self) -> Self::Output {
        match self.concat(other) {
            Ok(list) => list,
            Err(e) => panic!("cannot concatenate lists: {e}"),
        }
    }
}

/// Repetition by deep copy; multiplying by zero yields an empty list.
///
/// # Panics
/// Panics when a bounded walk faults; use [`LinkedList::repeat`] to
/// handle the error instead.
impl<T: Clone> Mul<usize> for &DoublyLinkedList<T> {
    type Output = DoublyLinkedList<T>;

    fn mul(self, times: usize) -> Self::Output {
        match self.repeat(times) {
            Ok(list) => list,
            Err(e) => panic!("cannot repeat list: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[i32]) -> DoublyLinkedList<i32> {
        DoublyLinkedList::from_values(values.iter().copied()).unwrap()
    }

    fn backward_values(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = list.traverse(-1).ok();
        while let Some(node) = cursor {
            out.push(*node.value());
            cursor = node.prev();
        }
        out
    }

    #[test]
    fn connect_fixes_both_directions() {
        let list = DoublyLinkedList::<i32>::new();
        let a = Node::new(1);
        let b = Node::new(2);
        list.connect(Some(&a), Some(&b));
        assert!(a.next().unwrap().ptr_eq(&b));
        assert!(b.prev().unwrap().ptr_eq(&a));
        list.connect(None, Some(&b));
        assert!(b.prev().is_none());
    }

    #[test]
    fn append_maintains_back_references() {
        let list = chain(&[1, 2, 3, 4]);
        assert_eq!(backward_values(&list), vec![4, 3, 2, 1]);
    }

    #[test]
    fn negative_traverse_matches_positive() {
        let list = chain(&[10, 20, 30, 40, 50]);
        for offset in 0..5isize {
            let forward = list.traverse(offset).unwrap();
            let backward = list.traverse(offset - 5).unwrap();
            assert!(forward.ptr_eq(&backward));
        }
        assert!(matches!(
            list.traverse(-6),
            Err(ListError::IndexOutOfRange { index: -6, len: 5 })
        ));
    }

    #[test]
    fn predecessor_is_constant_time_lookup() {
        let list = chain(&[1, 2, 3]);
        let middle = list.traverse(1).unwrap();
        let prev = list.predecessor(&middle).unwrap().unwrap();
        assert!(prev.ptr_eq(&list.head().unwrap()));
        let head = list.head().unwrap();
        assert!(list.predecessor(&head).unwrap().is_none());
    }

    #[test]
    fn relinking_operations_keep_directions_consistent() {
        let mut list = chain(&[1, 2, 3, 4, 5]);
        list.insert(2, 9).unwrap();
        list.pop(0).unwrap();
        list.swap(0, 3).unwrap();
        list.reverse().unwrap();
        let forward = list.to_vec().unwrap();
        let mut backward = backward_values(&list);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn display_names_the_variant() {
        let list = chain(&[7, 8]);
        assert_eq!(list.to_string(), "DoublyLinkedList(7 -> 8)");
        assert_eq!(format!("{list:?}"), "DoublyLinkedList([7, 8])");
    }

    #[test]
    fn copy_rebuilds_back_references() {
        let copy = chain(&[1, 2, 3]).copy();
        assert_eq!(backward_values(&copy), vec![3, 2, 1]);
    }
}
