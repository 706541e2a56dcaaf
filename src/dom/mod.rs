//! DOM Module - Arena-based document tree
//!
//! Implements a minimal host tree for the caret engine using:
//! - Arena allocation for nodes
//! - NodeId (u32) indices with explicit parent links
//! - Append-only construction; several disconnected roots may share an arena

pub mod node;
pub mod tree;

pub use node::{NodeId, NodeKind, TreeNode};
pub use tree::Tree;

/// Trait for tree read access - everything the caret engine consumes from
/// a host tree. Document-order classification is deliberately not part of
/// this trait; the engine derives it from parent links alone.
pub trait TreeAccess {
    /// Get the kind tag of a node
    fn kind_of(&self, id: NodeId) -> NodeKind;

    /// Get the ordered child list of a node
    fn children_of(&self, id: NodeId) -> &[NodeId];

    /// Get the parent of a node, or None for a root
    fn parent_of(&self, id: NodeId) -> Option<NodeId>;

    /// Get the character count of a text node (0 for other kinds)
    fn text_len_of(&self, id: NodeId) -> usize;

    /// Get the position of a node in its parent's child list (0 for a root)
    fn index_in_parent(&self, id: NodeId) -> usize {
        match self.parent_of(id) {
            Some(parent) => self
                .children_of(parent)
                .iter()
                .position(|&child| child == id)
                .unwrap_or(0),
            None => 0,
        }
    }
}
