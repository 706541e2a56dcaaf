//! Node relevance - the two-layer filter deciding which nodes carry carets
//!
//! Layer one is fixed: only document, fragment, element and text nodes are
//! addressable. Layer two is the caller's contextual test, consulted only
//! after layer one passes, so disallowed kinds are never exposed to caller
//! logic.

use crate::dom::{NodeId, TreeAccess};

/// Caller-supplied contextual relevance test.
///
/// Implementations must be pure and stable across repeated calls within
/// one traversal. Any `Fn(&T, NodeId) -> bool` closure qualifies through
/// the blanket impl.
pub trait Relevance<T: TreeAccess + ?Sized> {
    /// Contextual test for one node. The node's kind has already passed
    /// the fixed layer when this runs.
    fn is_relevant(&self, tree: &T, node: NodeId) -> bool;
}

impl<T: TreeAccess + ?Sized, F: Fn(&T, NodeId) -> bool> Relevance<T> for F {
    fn is_relevant(&self, tree: &T, node: NodeId) -> bool {
        self(tree, node)
    }
}

/// Accepts every addressable node
#[derive(Debug, Clone, Copy, Default)]
pub struct AllNodes;

impl<T: TreeAccess + ?Sized> Relevance<T> for AllNodes {
    fn is_relevant(&self, _tree: &T, _node: NodeId) -> bool {
        true
    }
}

/// Combined relevance test: fixed kind layer first, caller layer second
pub fn is_relevant<T, R>(tree: &T, relevance: &R, node: NodeId) -> bool
where
    T: TreeAccess + ?Sized,
    R: Relevance<T>,
{
    tree.kind_of(node).is_addressable() && relevance.is_relevant(tree, node)
}
