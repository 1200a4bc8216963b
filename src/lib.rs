//! # dsa
//!
//! Educational data-structures-and-algorithms library.
//!
//! ## Modules
//!
//! - `data_structures` - Linked lists over shared nodes (singly, doubly, cycle-aware walks)
//! - `searching` - Position lookups over slices (linear, binary, jump, interpolation, exponential, ternary)
//! - `sorting` - Ordering algorithms over slices (exchange, insertion, selection, merge, distribution, novelty)
//! - `number_theory` - Arithmetic functions (gcd, primality, Fibonacci, digital root, Ackermann)
//! - `strings` - Text predicates (pangram check)
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use dsa::data_structures::{LinkedList, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::from_values([3, 1, 2])?;
//! list.sort()?;
//! assert_eq!(list.to_vec()?, vec![1, 2, 3]);
//! # Ok::<(), dsa::data_structures::ListError>(())
//! ```
//!
//! ---
//!
//! Every structure walk is budgeted: a list walk that exceeds the
//! per-list `max_iter` reports a suspected cycle instead of spinning.

pub mod data_structures;
pub mod number_theory;
pub mod searching;
pub mod sorting;
pub mod strings;
