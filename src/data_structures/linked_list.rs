//! The shared linked-list contract.
//!
//! Variables:
//!   head     : Option<NodeRef<T>>  - first node, None if empty
//!   max_iter : usize               - walk budget before a cycle is suspected
//!
//! Equations:
//!   append(x):   walk to tail, tail.next = node                    O(N)
//!   traverse(i): i >= 0: follow i links from head                  O(N)
//!                i < 0:  one pass, trailing pointer lags |i| - 1   O(N)
//!   insert(i,x): prev.next = node, node.next = at                  O(N)
//!   pop(i):      prev.next = node.next, node detached              O(N)
//!   reverse():   flip every next link, head = old tail             O(N)
//!   find_middle: slow 1 step per fast 2, stop when fast runs out   O(N)
//!   sort():      relinking insertion sort, stable                  O(N^2)
//!
//! Both list variants implement [`LinkedList`] by supplying node
//! construction, the `connect` relink primitive and head/budget storage.
//! Every operation is a provided method built on those, so the variants
//! cannot drift apart observably: a doubly-linked list stays consistent
//! simply because its `connect` fixes both directions.
//!
//! Walks that could run away on a corrupted (cyclic) chain are bounded by
//! `max_iter` and fail with [`ListError::CycleSuspected`]. An orphaned
//! cyclic chain that no list owns leaks, as shared-ownership cycles do.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use super::node::NodeRef;

/// Default walk budget. A walk visiting more nodes than this without
/// reaching the end is treated as evidence of a cycle.
pub const DEFAULT_MAX_ITER: usize = 99;

/// Errors surfaced by list operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("operation requires a non-empty list")]
    EmptyList,
    #[error("value not found in list")]
    ValueNotFound,
    #[error("walk exceeded {limit} nodes, list may be cyclic")]
    CycleSuspected { limit: usize },
}

/// Bounded forward iterator over a chain.
///
/// Yields at most `limit` nodes. The step after that yields
/// `Err(CycleSuspected)` once, and the iterator is fused afterwards.
pub struct Nodes<T> {
    cursor: Option<NodeRef<T>>,
    steps: usize,
    limit: usize,
}

impl<T> Nodes<T> {
    pub(crate) fn new(head: Option<NodeRef<T>>, limit: usize) -> Self {
        Nodes { cursor: head, steps: 0, limit }
    }
}

impl<T> Iterator for Nodes<T> {
    type Item = Result<NodeRef<T>, ListError>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take()?;
        self.steps += 1;
        if self.steps > self.limit {
            return Some(Err(ListError::CycleSuspected { limit: self.limit }));
        }
        self.cursor = node.next();
        Some(Ok(node))
    }
}

/// The contract both list variants implement.
///
/// Required methods cover storage and the linking primitives. Everything
/// else is provided on top of them; [`LinkedList::predecessor`] and
/// [`LinkedList::traverse`] are the two strategies a variant may replace
/// (the doubly-linked list answers both from its back-references).
pub trait LinkedList<T> {
    /// Allocate a detached node for this list.
    fn create_node(&self, value: T) -> NodeRef<T>;

    /// Relink `a -> b`. Either side may be `None` to express a boundary:
    /// `connect(a, None)` makes `a` a tail, `connect(None, b)` makes `b`
    /// a head. Variants decide how many directions to fix.
    fn connect(&self, a: Option<&NodeRef<T>>, b: Option<&NodeRef<T>>);

    /// Handle to the first node.
    fn head(&self) -> Option<NodeRef<T>>;

    /// Replace the first-node handle. The chain is not rewired.
    fn set_head(&mut self, head: Option<NodeRef<T>>);

    /// Current walk budget.
    fn max_iter(&self) -> usize;

    /// Replace the walk budget. Implementations reject a zero budget.
    fn set_max_iter(&mut self, limit: usize);

    /// True when the list has no nodes.
    fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// Bounded iterator over the chain.
    fn nodes(&self) -> Nodes<T> {
        Nodes::new(self.head(), self.max_iter())
    }

    /// Number of nodes.
    fn len(&self) -> Result<usize, ListError> {
        let mut n = 0;
        for entry in self.nodes() {
            entry?;
            n += 1;
        }
        Ok(n)
    }

    /// Resolve an index to its node. Non-negative indices count from the
    /// head; negative indices count from the tail, `-1` being the tail
    /// itself.
    fn traverse(&self, index: isize) -> Result<NodeRef<T>, ListError> {
        if index >= 0 {
            return nth_from_front(self, index);
        }
        // One forward pass; a trailing pointer lags |index| - 1 nodes
        // behind the cursor and lands on the target as the walk ends.
        let lag = index.unsigned_abs() - 1;
        let mut trailing: Option<NodeRef<T>> = None;
        let mut count = 0usize;
        for entry in self.nodes() {
            entry?;
            if count == lag {
                trailing = self.head();
            } else if count > lag {
                trailing = trailing.and_then(|node| node.next());
            }
            count += 1;
        }
        trailing.ok_or(ListError::IndexOutOfRange { index, len: count })
    }

    /// The node whose forward link points at `node`, or `None` when
    /// `node` is the head or not reachable from it.
    fn predecessor(&self, node: &NodeRef<T>) -> Result<Option<NodeRef<T>>, ListError> {
        let mut prev = None;
        for entry in self.nodes() {
            let current = entry?;
            if current.ptr_eq(node) {
                return Ok(prev);
            }
            prev = Some(current);
        }
        Ok(None)
    }

    /// Add `value` at the tail.
    fn append(&mut self, value: T) -> Result<(), ListError> {
        let node = self.create_node(value);
        attach_tail(self, node)
    }

    /// Append every value in order, stopping at the first fault.
    fn extend<I>(&mut self, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Splice `value` in before the node currently at `index`. A positive
    /// index past the end appends instead; a negative index past the
    /// front prepends instead. The asymmetry is part of the contract.
    /// A suspected cycle propagates rather than triggering the fallback.
    fn insert(&mut self, index: isize, value: T) -> Result<(), ListError> {
        let node = self.create_node(value);
        if index == 0 || self.is_empty() {
            attach_head(self, node);
            return Ok(());
        }
        let at = match self.traverse(index) {
            Ok(at) => at,
            Err(ListError::IndexOutOfRange { .. }) => {
                if index > 0 {
                    return attach_tail(self, node);
                }
                attach_head(self, node);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        match self.predecessor(&at)? {
            Some(prev) => {
                self.connect(Some(&node), Some(&at));
                self.connect(Some(&prev), Some(&node));
            }
            None => attach_head(self, node),
        }
        Ok(())
    }

    /// Detach and return the node at `index`. Pass `-1` for the tail.
    fn pop(&mut self, index: isize) -> Result<NodeRef<T>, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let node = self.traverse(index)?;
        let next = node.next();
        match self.predecessor(&node)? {
            Some(prev) => self.connect(Some(&prev), next.as_ref()),
            None => {
                self.connect(None, next.as_ref());
                self.set_head(next);
            }
        }
        node.set_next(None);
        node.set_prev(None);
        Ok(node)
    }

    /// Detach the first node whose value equals `value`.
    fn remove(&mut self, value: &T) -> Result<(), ListError>
    where
        T: PartialEq,
    {
        let mut prev: Option<NodeRef<T>> = None;
        for entry in self.nodes() {
            let node = entry?;
            if *node.value() == *value {
                let next = node.next();
                match prev {
                    Some(p) => self.connect(Some(&p), next.as_ref()),
                    None => {
                        self.connect(None, next.as_ref());
                        self.set_head(next);
                    }
                }
                node.set_next(None);
                node.set_prev(None);
                return Ok(());
            }
            prev = Some(node);
        }
        Err(ListError::ValueNotFound)
    }

    /// Exchange the nodes at two indices by relinking. Equal indices are
    /// accepted unvalidated and do nothing.
    fn swap(&mut self, index1: isize, index2: isize) -> Result<(), ListError> {
        if index1 == index2 {
            return Ok(());
        }
        let a = self.traverse(index1)?;
        let b = self.traverse(index2)?;
        if a.ptr_eq(&b) {
            return Ok(());
        }
        let prev_a = self.predecessor(&a)?;
        let prev_b = self.predecessor(&b)?;
        let next_a = a.next();
        let next_b = b.next();
        if next_a.as_ref().is_some_and(|n| n.ptr_eq(&b)) {
            // prev_a -> a -> b -> next_b  becomes  prev_a -> b -> a -> next_b
            match &prev_a {
                Some(p) => self.connect(Some(p), Some(&b)),
                None => {
                    self.connect(None, Some(&b));
                    self.set_head(Some(b.clone()));
                }
            }
            self.connect(Some(&b), Some(&a));
            self.connect(Some(&a), next_b.as_ref());
        } else if next_b.as_ref().is_some_and(|n| n.ptr_eq(&a)) {
            // prev_b -> b -> a -> next_a  becomes  prev_b -> a -> b -> next_a
            match &prev_b {
                Some(p) => self.connect(Some(p), Some(&a)),
                None => {
                    self.connect(None, Some(&a));
                    self.set_head(Some(a.clone()));
                }
            }
            self.connect(Some(&a), Some(&b));
            self.connect(Some(&b), next_a.as_ref());
        } else {
            match &prev_a {
                Some(p) => self.connect(Some(p), Some(&b)),
                None => {
                    self.connect(None, Some(&b));
                    self.set_head(Some(b.clone()));
                }
            }
            match &prev_b {
                Some(p) => self.connect(Some(p), Some(&a)),
                None => {
                    self.connect(None, Some(&a));
                    self.set_head(Some(a.clone()));
                }
            }
            self.connect(Some(&b), next_a.as_ref());
            self.connect(Some(&a), next_b.as_ref());
        }
        Ok(())
    }

    /// Reverse in place by flipping each forward link.
    fn reverse(&mut self) -> Result<(), ListError> {
        let limit = self.max_iter();
        let mut reversed: Option<NodeRef<T>> = None;
        let mut cursor = self.head();
        let mut steps = 0usize;
        while let Some(node) = cursor {
            steps += 1;
            if steps > limit {
                return Err(ListError::CycleSuspected { limit });
            }
            cursor = node.next();
            self.connect(Some(&node), reversed.as_ref());
            reversed = Some(node);
        }
        self.connect(None, reversed.as_ref());
        self.set_head(reversed);
        Ok(())
    }

    /// The node at `floor(len / 2)`, found by tortoise and hare. The
    /// hare's node visits are charged against `max_iter`, so the bound
    /// is the same one a full walk answers to.
    fn find_middle(&self) -> Result<NodeRef<T>, ListError> {
        let mut slow = self.head().ok_or(ListError::EmptyList)?;
        let mut fast = Some(slow.clone());
        let limit = self.max_iter();
        let mut visited = 1usize;
        while let Some(ahead) = fast.as_ref().and_then(|node| node.next()) {
            visited += 1;
            if visited > limit {
                return Err(ListError::CycleSuspected { limit });
            }
            if let Some(next) = slow.next() {
                slow = next;
            }
            fast = ahead.next();
            if fast.is_some() {
                visited += 1;
                if visited > limit {
                    return Err(ListError::CycleSuspected { limit });
                }
            }
        }
        Ok(slow)
    }

    /// Floyd's cycle detection. Returns the node where the cycle begins,
    /// or `None` for an acyclic chain. The race follows raw links and
    /// terminates on any chain shape, so `max_iter` is not consulted and
    /// is observably unchanged when this returns.
    fn detect_cycle(&self) -> Option<NodeRef<T>> {
        let head = self.head()?;
        let mut slow = head.clone();
        let mut fast = head.clone();
        loop {
            fast = fast.next()?.next()?;
            slow = slow.next()?;
            if slow.ptr_eq(&fast) {
                break;
            }
        }
        // The meeting point is cycle-distance from the entry; stepping a
        // second pointer from the head makes them meet exactly there.
        let mut entry = head;
        while !entry.ptr_eq(&slow) {
            entry = entry.next()?;
            slow = slow.next()?;
        }
        Some(entry)
    }

    /// Keep the first occurrence of each value, dropping later ones.
    /// Both the outer walk and each skip-run are bounded.
    fn remove_duplicates(&mut self) -> Result<(), ListError>
    where
        T: PartialEq,
    {
        let limit = self.max_iter();
        let mut seen: Vec<NodeRef<T>> = Vec::new();
        let mut prev: Option<NodeRef<T>> = None;
        let mut cursor = self.head();
        let mut steps = 0usize;
        while let Some(node) = cursor {
            steps += 1;
            if steps > limit {
                return Err(ListError::CycleSuspected { limit });
            }
            let duplicate = seen.iter().any(|kept| *kept.value() == *node.value());
            if duplicate {
                // Skip the whole run of already-seen values.
                let mut follow = node.next();
                let mut run = 0usize;
                while let Some(n) = follow.clone() {
                    if !seen.iter().any(|kept| *kept.value() == *n.value()) {
                        break;
                    }
                    run += 1;
                    if run > limit {
                        return Err(ListError::CycleSuspected { limit });
                    }
                    follow = n.next();
                }
                // The head is always first-seen, so a duplicate has a
                // predecessor.
                if let Some(p) = &prev {
                    self.connect(Some(p), follow.as_ref());
                }
                cursor = follow;
            } else {
                seen.push(node.clone());
                prev = Some(node.clone());
                cursor = node.next();
            }
        }
        Ok(())
    }

    /// Stable in-place insertion sort by relinking; values never move
    /// between nodes.
    fn sort(&mut self) -> Result<(), ListError>
    where
        T: Ord,
        Self: Sized,
    {
        self.sort_by(|a, b| a.cmp(b))
    }

    /// Sort with a comparator, as [`slice::sort_by`] does. Already
    /// ordered nodes extend the sorted prefix; an out-of-order node is
    /// unlinked and re-spliced by a scan from the front.
    fn sort_by<F>(&mut self, mut compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
        Self: Sized,
    {
        let Some(mut front) = self.head() else {
            return Ok(());
        };
        let limit = self.max_iter();
        let mut last_sorted = front.clone();
        let mut cursor = last_sorted.next();
        let mut steps = 0usize;
        while let Some(node) = cursor {
            steps += 1;
            if steps > limit {
                return Err(ListError::CycleSuspected { limit });
            }
            if compare(&node.value(), &last_sorted.value()) != Ordering::Less {
                last_sorted = node;
                cursor = last_sorted.next();
                continue;
            }
            self.connect(Some(&last_sorted), node.next().as_ref());
            if compare(&node.value(), &front.value()) == Ordering::Less {
                self.connect(Some(&node), Some(&front));
                self.connect(None, Some(&node));
                self.set_head(Some(node.clone()));
                front = node;
            } else {
                // The prefix always holds a strictly greater successor
                // (the prefix boundary at the latest), so this scan stays
                // inside it.
                let mut scan = front.clone();
                let mut scanned = 0usize;
                while let Some(after) = scan.next() {
                    if compare(&after.value(), &node.value()) == Ordering::Greater {
                        break;
                    }
                    scanned += 1;
                    if scanned > limit {
                        return Err(ListError::CycleSuspected { limit });
                    }
                    scan = after;
                }
                let after = scan.next();
                self.connect(Some(&node), after.as_ref());
                self.connect(Some(&scan), Some(&node));
            }
            cursor = last_sorted.next();
        }
        Ok(())
    }

    /// Sort by a key extractor, as [`slice::sort_by_key`] does.
    fn sort_by_key<K, F>(&mut self, mut key: F) -> Result<(), ListError>
    where
        K: Ord,
        F: FnMut(&T) -> K,
        Self: Sized,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Position of the first node matching `value`.
    fn index(&self, value: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        self.index_range(value, 0, isize::MAX)
    }

    /// Position of the first match inside the half-open window
    /// `[start, end)`. Negative endpoints count from the tail and clamp
    /// at the front.
    fn index_range(&self, value: &T, start: isize, end: isize) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        let (start, end) = if start < 0 || end < 0 {
            let len = self.len()? as isize;
            let resolve = |bound: isize| if bound < 0 { (len + bound).max(0) } else { bound };
            (resolve(start), resolve(end))
        } else {
            (start, end)
        };
        for (position, entry) in self.nodes().enumerate() {
            let node = entry?;
            let position = position as isize;
            if position >= end {
                break;
            }
            if position >= start && *node.value() == *value {
                return Ok(position as usize);
            }
        }
        Err(ListError::ValueNotFound)
    }

    /// How many nodes match `value`.
    fn count(&self, value: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        let mut matches = 0;
        for entry in self.nodes() {
            let node = entry?;
            if *node.value() == *value {
                matches += 1;
            }
        }
        Ok(matches)
    }

    /// True when some node matches `value`.
    fn contains(&self, value: &T) -> Result<bool, ListError>
    where
        T: PartialEq,
    {
        for entry in self.nodes() {
            if *entry?.value() == *value {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Collect the values into a `Vec`.
    fn to_vec(&self) -> Result<Vec<T>, ListError>
    where
        T: Clone,
    {
        self.nodes()
            .map(|entry| entry.map(|node| node.value().clone()))
            .collect()
    }

    /// Drop every node, unlinking one at a time so long or cyclic chains
    /// cannot recurse the teardown.
    fn clear(&mut self) {
        let mut cursor = self.head();
        self.set_head(None);
        while let Some(node) = cursor {
            node.set_prev(None);
            cursor = node.set_next(None);
        }
    }

    /// Deep copy: every node duplicated, no handle shared with `self`.
    /// A cycle in the source is reproduced between the corresponding
    /// copies, so copying never fails.
    fn copy(&self) -> Self
    where
        Self: Sized + Default,
        T: Clone,
    {
        let mut out = Self::default();
        out.set_max_iter(self.max_iter());
        let mut copies: Vec<(NodeRef<T>, NodeRef<T>)> = Vec::new();
        let mut tail: Option<NodeRef<T>> = None;
        let mut cursor = self.head();
        while let Some(node) = cursor {
            if let Some((_, twin)) = copies.iter().find(|(seen, _)| seen.ptr_eq(&node)) {
                // The chain loops back; mirror the cycle and stop.
                if let Some(t) = &tail {
                    out.connect(Some(t), Some(twin));
                }
                return out;
            }
            let twin = out.create_node(node.value().clone());
            match &tail {
                Some(t) => out.connect(Some(t), Some(&twin)),
                None => {
                    out.connect(None, Some(&twin));
                    out.set_head(Some(twin.clone()));
                }
            }
            copies.push((node.clone(), twin.clone()));
            tail = Some(twin);
            cursor = node.next();
        }
        out
    }

    /// A new list holding deep copies of both chains linked end to end.
    fn concat(&self, other: &Self) -> Result<Self, ListError>
    where
        Self: Sized + Default,
        T: Clone,
    {
        let mut merged = self.copy();
        let mut extra = other.copy();
        let spliced = extra.head();
        extra.set_head(None);
        match merged.traverse(-1) {
            Ok(tail) => merged.connect(Some(&tail), spliced.as_ref()),
            Err(ListError::IndexOutOfRange { .. }) => {
                merged.connect(None, spliced.as_ref());
                merged.set_head(spliced);
                return Ok(merged);
            }
            Err(e) => {
                // Dismantle the orphaned copy iteratively before bailing.
                let mut cursor = spliced;
                while let Some(node) = cursor {
                    cursor = node.set_next(None);
                }
                return Err(e);
            }
        }
        Ok(merged)
    }

    /// A new list holding `times` copies of this chain end to end. Zero
    /// yields an empty list. Only the tail walk before each splice is
    /// bounded, so the finished product can land past `max_iter`; like a
    /// list built by `append`, it then faults on any full walk.
    fn repeat(&self, times: usize) -> Result<Self, ListError>
    where
        Self: Sized + Default,
        T: Clone,
    {
        let mut out = Self::default();
        out.set_max_iter(self.max_iter());
        for _ in 0..times {
            out = out.concat(self)?;
        }
        Ok(out)
    }

    /// Build a list by appending each value in order.
    fn from_values<I>(values: I) -> Result<Self, ListError>
    where
        Self: Sized + Default,
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::default();
        list.extend(values)?;
        Ok(list)
    }
}

pub(crate) fn nth_from_front<T, L>(list: &L, index: isize) -> Result<NodeRef<T>, ListError>
where
    L: LinkedList<T> + ?Sized,
{
    let mut count = 0usize;
    for entry in list.nodes() {
        let node = entry?;
        if count as isize == index {
            return Ok(node);
        }
        count += 1;
    }
    Err(ListError::IndexOutOfRange { index, len: count })
}

fn attach_tail<T, L>(list: &mut L, node: NodeRef<T>) -> Result<(), ListError>
where
    L: LinkedList<T> + ?Sized,
{
    let mut tail = None;
    for entry in list.nodes() {
        tail = Some(entry?);
    }
    match tail {
        Some(t) => list.connect(Some(&t), Some(&node)),
        None => {
            list.connect(None, Some(&node));
            list.set_head(Some(node));
        }
    }
    Ok(())
}

fn attach_head<T, L>(list: &mut L, node: NodeRef<T>)
where
    L: LinkedList<T> + ?Sized,
{
    let old = list.head();
    list.connect(Some(&node), old.as_ref());
    list.connect(None, Some(&node));
    list.set_head(Some(node));
}

pub(crate) fn chains_equal<T, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq,
    A: LinkedList<T> + ?Sized,
    B: LinkedList<T> + ?Sized,
{
    let mut left = a.nodes();
    let mut right = b.nodes();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(Ok(x)), Some(Ok(y))) => {
                if *x.value() != *y.value() {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Ordering over chains: the first pairwise `<` claims `Less` even after
/// an earlier pair compared `>`; with no such pair, a strict prefix is
/// `Less`, element-wise equality is `Equal` and anything else `Greater`.
/// A traversal fault makes the lists incomparable.
pub(crate) fn chains_partial_cmp<T, A, B>(a: &A, b: &B) -> Option<Ordering>
where
    T: PartialOrd,
    A: LinkedList<T> + ?Sized,
    B: LinkedList<T> + ?Sized,
{
    let mut left = a.nodes();
    let mut right = b.nodes();
    let mut all_equal = true;
    loop {
        match (left.next(), right.next()) {
            (None, None) => {
                return Some(if all_equal { Ordering::Equal } else { Ordering::Greater });
            }
            (None, Some(Ok(_))) => return Some(Ordering::Less),
            (Some(Ok(_)), None) => return Some(Ordering::Greater),
            (Some(Ok(x)), Some(Ok(y))) => match (*x.value()).partial_cmp(&*y.value()) {
                Some(Ordering::Less) => return Some(Ordering::Less),
                Some(Ordering::Equal) => {}
                _ => all_equal = false,
            },
            _ => return None,
        }
    }
}

pub(crate) fn format_chain<T, L>(list: &L, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result
where
    T: fmt::Display,
    L: LinkedList<T> + ?Sized,
{
    let rendered: Result<Vec<String>, ListError> = list
        .nodes()
        .map(|entry| entry.map(|node| node.value().to_string()))
        .collect();
    match rendered {
        Ok(values) => write!(f, "{}({})", name, values.join(" -> ")),
        Err(_) => write!(f, "{name}(<cannot show node(s)>)"),
    }
}

pub(crate) fn format_chain_debug<T, L>(
    list: &L,
    f: &mut fmt::Formatter<'_>,
    name: &str,
) -> fmt::Result
where
    T: fmt::Debug,
    L: LinkedList<T> + ?Sized,
{
    let rendered: Result<Vec<String>, ListError> = list
        .nodes()
        .map(|entry| entry.map(|node| format!("{:?}", node.value())))
        .collect();
    match rendered {
        Ok(values) => write!(f, "{}([{}])", name, values.join(", ")),
        Err(_) => write!(f, "{name}(<cannot show node(s)>)"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::singly_linked_list::SinglyLinkedList;
    use super::*;

    fn chain(values: &[i32]) -> SinglyLinkedList<i32> {
        SinglyLinkedList::from_values(values.iter().copied()).unwrap()
    }

    #[test]
    fn iterator_stops_at_budget_and_fuses() {
        let mut list = chain(&[1, 2, 3, 4]);
        list.set_max_iter(2);
        let mut nodes = list.nodes();
        assert_eq!(*nodes.next().unwrap().unwrap().value(), 1);
        assert_eq!(*nodes.next().unwrap().unwrap().value(), 2);
        assert_eq!(
            nodes.next().unwrap().unwrap_err(),
            ListError::CycleSuspected { limit: 2 }
        );
        assert!(nodes.next().is_none());
        assert!(nodes.next().is_none());
    }

    #[test]
    fn budget_counts_yields_not_links() {
        let mut list = chain(&[1, 2, 3]);
        list.set_max_iter(3);
        assert_eq!(list.len().unwrap(), 3);
        list.set_max_iter(2);
        assert_eq!(list.len().unwrap_err(), ListError::CycleSuspected { limit: 2 });
    }

    #[test]
    fn default_budget_is_99() {
        let list = SinglyLinkedList::<i32>::new();
        assert_eq!(list.max_iter(), DEFAULT_MAX_ITER);
        assert_eq!(DEFAULT_MAX_ITER, 99);
    }

    #[test]
    fn list_at_budget_builds_but_full_walk_faults() {
        // Appending walks the chain before the new node is attached, so a
        // list one past the budget can still be built.
        let mut list = SinglyLinkedList::new();
        list.set_max_iter(4);
        for n in 0..5 {
            list.append(n).unwrap();
        }
        assert_eq!(list.len().unwrap_err(), ListError::CycleSuspected { limit: 4 });
        assert_eq!(*list.traverse(3).unwrap().value(), 3);
    }

    #[test]
    fn find_middle_charges_node_visits_like_a_full_walk() {
        let mut list = chain(&[1, 2, 3, 4]);
        list.set_max_iter(4);
        assert_eq!(*list.find_middle().unwrap().value(), 3);
        // One node past the budget: len() faults, and so does the hare.
        let mut longer = SinglyLinkedList::new();
        longer.set_max_iter(4);
        for n in 0..5 {
            longer.append(n).unwrap();
        }
        assert_eq!(longer.len().unwrap_err(), ListError::CycleSuspected { limit: 4 });
        assert_eq!(
            longer.find_middle().unwrap_err(),
            ListError::CycleSuspected { limit: 4 }
        );
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ListError::IndexOutOfRange { index: -4, len: 2 };
        assert_eq!(err.to_string(), "index -4 out of range for list of length 2");
        let err = ListError::CycleSuspected { limit: 99 };
        assert_eq!(err.to_string(), "walk exceeded 99 nodes, list may be cyclic");
    }
}
