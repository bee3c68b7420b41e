//! A balanced binary search tree over unique, ordered keys with explicit,
//! on-demand rebalancing.
//!
//! [`Tree`] is built height-balanced from any input sequence and supports
//! point insertion and removal, key lookup, height / depth queries, a
//! balance check, whole-tree rebalancing, and lazy traversal in all four
//! classic orders (in / pre / post / level).
//!
//! Unlike a self-adjusting tree, mutations never restructure it: the shape a
//! sequence of inserts produces is the shape you get until [`Tree::rebalance()`]
//! is called. That makes the structural effect of each operation observable,
//! at the cost of lookups degrading towards `O(n)` on adversarial insertion
//! orders.
//!
//! ```
//! use balsa::Tree;
//!
//! let mut t = Tree::from_iter([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(t.get(&7), Some(&7));
//! assert_eq!(t.depth(&9), Some(2));
//!
//! // In-order traversal of a search tree yields ascending keys.
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! t.remove(&5);
//! assert!(!t.contains(&5));
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::todo,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub
)]

mod iter;
mod node;
mod render;
mod tree;


pub use iter::IntoIter;
pub use tree::*;
