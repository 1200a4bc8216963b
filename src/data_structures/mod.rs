//! Linked data structures built on shared, interiorly mutable nodes.

pub mod doubly_linked_list;
pub mod linked_list;
pub mod node;
pub mod singly_linked_list;

pub use doubly_linked_list::DoublyLinkedList;
pub use linked_list::{LinkedList, ListError, Nodes, DEFAULT_MAX_ITER};
pub use node::{Node, NodeRef};
pub use singly_linked_list::SinglyLinkedList;
