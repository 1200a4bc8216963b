//! Shared node handle for the linked-list engine.
//!
//! Variables:
//!   value : T                    - payload, readable and writable in place
//!   next  : Option<NodeRef<T>>   - owning forward link
//!   prev  : Option<Weak<..>>     - non-owning back-reference
//!
//! A chain is kept alive by its `next` links alone. The back-reference is
//! weak, so a doubly-linked chain cannot keep itself alive once the list
//! lets go of its head. Payload access goes through `RefCell` guards;
//! hold them briefly and the usual borrow rules apply.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

/// A list node: one value, one owned forward link, one observed
/// back-reference.
pub struct Node<T> {
    value: T,
    next: Option<NodeRef<T>>,
    prev: Option<Weak<RefCell<Node<T>>>>,
}

impl<T> Node<T> {
    /// Allocate a detached node holding `value` and return a handle to it.
    pub fn new(value: T) -> NodeRef<T> {
        NodeRef(Rc::new(RefCell::new(Node {
            value,
            next: None,
            prev: None,
        })))
    }
}

/// Cheaply cloneable handle to a shared, mutable [`Node`].
///
/// Cloning a handle never clones the node; equality compares values,
/// [`NodeRef::ptr_eq`] compares identity. Link setters operate on this
/// node alone; lists keep both directions consistent through their own
/// relink primitive.
pub struct NodeRef<T>(Rc<RefCell<Node<T>>>);

impl<T> NodeRef<T> {
    /// Read access to the payload.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |node| &node.value)
    }

    /// Write access to the payload.
    pub fn value_mut(&self) -> RefMut<'_, T> {
        RefMut::map(self.0.borrow_mut(), |node| &mut node.value)
    }

    /// The owned successor, if any.
    pub fn next(&self) -> Option<NodeRef<T>> {
        self.0.borrow().next.clone()
    }

    /// Replace the forward link, returning the link it displaced.
    pub fn set_next(&self, next: Option<NodeRef<T>>) -> Option<NodeRef<T>> {
        std::mem::replace(&mut self.0.borrow_mut().next, next)
    }

    /// The back-reference, if set and its target is still alive.
    pub fn prev(&self) -> Option<NodeRef<T>> {
        self.0.borrow().prev.as_ref().and_then(Weak::upgrade).map(NodeRef)
    }

    /// Point the back-reference at `prev`, or clear it.
    pub fn set_prev(&self, prev: Option<&NodeRef<T>>) {
        self.0.borrow_mut().prev = prev.map(|node| Rc::downgrade(&node.0));
    }

    /// Do both handles refer to the same node?
    pub fn ptr_eq(&self, other: &NodeRef<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Consume a fully detached node, yielding its payload. Returns the
    /// handle unchanged while other handles still share the node.
    pub fn into_value(self) -> Result<T, NodeRef<T>> {
        match Rc::try_unwrap(self.0) {
            Ok(cell) => Ok(cell.into_inner().value),
            Err(shared) => Err(NodeRef(shared)),
        }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        NodeRef(Rc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.value() == *other.value()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.value())
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", *self.value())
    }
}
