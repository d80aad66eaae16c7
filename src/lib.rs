//! An ordered set based on an AVL tree: a binary search tree that keeps the heights of every
//! node's two subtrees within one of each other by rotating on the way back up from each
//! insertion and removal.
//!
//! ```
//! let mut tree = avl::AvlTree::new();
//!
//! for key in vec![50, 30, 70, 20, 40, 60, 80] { tree.insert(key); }
//! assert!(tree.remove(&50));
//! assert!(!tree.remove(&50));
//!
//! assert_eq!(tree.len(), 6);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod node;
#[cfg(feature = "ordered_iter")] mod ordered_iter;
#[cfg(feature = "quickcheck")] mod quickcheck;
pub mod tree;

pub use tree::AvlTree;
