//! Forward-only list variant.
//!
//! Variables:
//!   head     : Option<NodeRef<T>>  - first node, None if empty
//!   max_iter : usize               - walk budget, default 99
//!
//! Equations:
//!   connect(a, b):  a.next = b, back-references untouched  O(1)
//!   predecessor(n): scan from head until x.next == n       O(N)
//!
//! `connect` fixes forward links only, so the shared operations fall back
//! to their one-directional strategies: negative traversal runs a single
//! forward pass with a trailing pointer, and predecessor lookup scans
//! from the head.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use super::linked_list::{
    chains_equal, chains_partial_cmp, format_chain, format_chain_debug, LinkedList, ListError,
    Nodes, DEFAULT_MAX_ITER,
};
use super::node::{Node, NodeRef};

pub struct SinglyLinkedList<T> {
    head: Option<NodeRef<T>>,
    max_iter: usize,
}

impl<T> SinglyLinkedList<T> {
    /// An empty list with the default walk budget.
    pub fn new() -> Self {
        Self { head: None, max_iter: DEFAULT_MAX_ITER }
    }
}

impl<T> LinkedList<T> for SinglyLinkedList<T> {
    fn create_node(&self, value: T) -> NodeRef<T> {
        Node::new(value)
    }

    fn connect(&self, a: Option<&NodeRef<T>>, b: Option<&NodeRef<T>>) {
        if let Some(a) = a {
            a.set_next(b.cloned());
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
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        chains_equal(self, other)
    }
}

impl<T: PartialOrd> PartialOrd for SinglyLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        chains_partial_cmp(self, other)
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_chain(self, f, "SinglyLinkedList")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_chain_debug(self, f, "SinglyLinkedList")
    }
}

impl<T> IntoIterator for &SinglyLinkedList<T> {
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
impl<T: Clone> Add for &SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;

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
impl<T: Clone> Mul<usize> for &SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;

    fn mul(self, times: usize) -> Self::Output {
        match self.repeat(times) {
            Ok(list) => list,
            Err(e) => panic!("cannot repeat list: {e}"),
        }
    }
}
