//! chainlist - singly-linked list container
//!
//! A generic, exclusively-owned chain of [`Node`]s with index-addressed and
//! value-addressed operations, borrowing iterators and a diagnostic summary.
//!
//! ```
//! use chainlist::{LinkedList, ListError};
//!
//! let mut list: LinkedList<&str> = ["a", "b", "a"].into();
//! assert_eq!(list.remove_value(&"a"), Ok("a"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert!(matches!(list.get(5), Err(ListError::IndexOutOfBounds { .. })));
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod list;
pub mod node;
pub mod utils;

pub use display::DisplayOptions;
pub use error::{ListError, Result};
pub use list::{IntoIter, Iter, IterMut, LinkedList};
pub use node::{Link, Node};
