//! domcaret - caret positions and bounded navigation over a document tree
//!
//! Building blocks for caret movement atop a rendered document tree:
//! - `dom`: arena-backed host tree plus the `TreeAccess` read trait the
//!   engine is written against
//! - `caret::Location`: immutable (node, offset) positions with
//!   normalization and document-order comparison
//! - `caret::Space`: bounded region with relevance filtering, adjacent
//!   position stepping and lazy iteration
//!
//! The engine never mutates the tree; every operation is a pure read over
//! a caller-owned tree.
//!
//! ```
//! use domcaret::{AllNodes, Location, Space, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.add_element(None, "p");
//! tree.add_text(Some(root), "hi");
//!
//! let space = Space::spanning(&tree, root, AllNodes).unwrap();
//! let positions: Vec<_> = space.iter_forward().collect();
//!
//! // (p, 0), ("hi", 0..=2), (p, 1)
//! assert_eq!(positions.len(), 5);
//! assert_eq!(positions.first(), Some(&Location::at(root, 0)));
//! assert_eq!(positions.last(), Some(&Location::at(root, 1)));
//! ```

pub mod caret;
pub mod dom;
pub mod error;

pub use caret::{relate, AllNodes, Location, Relation, Relevance, Space};
pub use dom::{NodeId, NodeKind, Tree, TreeAccess};
pub use error::CaretError;
