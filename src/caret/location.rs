//! Caret location - an immutable (node, offset) position
//!
//! Offsets index into children for element, document and fragment nodes
//! and into character data for text nodes. An offset may exceed the
//! natural bound until normalized; it is never negative.

use super::order::{relate_detailed, DetailedRelation};
use crate::dom::{NodeId, NodeKind, TreeAccess};
use crate::error::CaretError;
use std::cmp::Ordering;

/// A caret position: a node plus an offset into it.
///
/// Locations are plain values; two are equal iff they name the same node
/// and the same offset. All tree-dependent questions (normalization,
/// pointed node, ordering) take the tree as an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    node: NodeId,
    offset: usize,
}

impl Location {
    /// Build a location from a signed offset, as handed over by host
    /// layers doing caret arithmetic. Rejects negative offsets.
    pub fn new(node: NodeId, offset: i64) -> Result<Self, CaretError> {
        if offset < 0 {
            return Err(CaretError::NegativeOffset(offset));
        }
        Ok(Location {
            node,
            offset: offset as usize,
        })
    }

    /// Build a location from an offset already known to be non-negative
    pub fn at(node: NodeId, offset: usize) -> Self {
        Location { node, offset }
    }

    /// The node this location lives in
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The offset into the node
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Location in `node`'s parent pointing directly at `node`
    pub fn before_node<T: TreeAccess + ?Sized>(tree: &T, node: NodeId) -> Result<Self, CaretError> {
        let parent = tree.parent_of(node).ok_or(CaretError::NoParent)?;
        Ok(Location::at(parent, tree.index_in_parent(node)))
    }

    /// Location in `node`'s parent pointing just after `node`
    pub fn after_node<T: TreeAccess + ?Sized>(tree: &T, node: NodeId) -> Result<Self, CaretError> {
        let parent = tree.parent_of(node).ok_or(CaretError::NoParent)?;
        Ok(Location::at(parent, tree.index_in_parent(node) + 1))
    }

    /// Node this location points at: the node itself for text locations,
    /// otherwise the child at the offset (None when pointing past the last
    /// child).
    pub fn pointed_node<T: TreeAccess + ?Sized>(&self, tree: &T) -> Option<NodeId> {
        if tree.kind_of(self.node) == NodeKind::Text {
            return Some(self.node);
        }
        tree.children_of(self.node).get(self.offset).copied()
    }

    /// Natural offset bound for this location's node
    fn offset_bound<T: TreeAccess + ?Sized>(&self, tree: &T) -> Result<usize, CaretError> {
        match tree.kind_of(self.node) {
            NodeKind::Text => Ok(tree.text_len_of(self.node)),
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::Element => {
                Ok(tree.children_of(self.node).len())
            }
            kind => Err(CaretError::UnsupportedNodeType(kind)),
        }
    }

    /// The offset clamped into the node's valid range
    pub fn normalized_offset<T: TreeAccess + ?Sized>(
        &self,
        tree: &T,
    ) -> Result<usize, CaretError> {
        Ok(self.offset.min(self.offset_bound(tree)?))
    }

    /// True when the offset is already within the node's valid range
    pub fn is_normalized<T: TreeAccess + ?Sized>(&self, tree: &T) -> Result<bool, CaretError> {
        Ok(self.offset <= self.offset_bound(tree)?)
    }

    /// This location with the offset clamped into the valid range.
    /// Normalizing an already-normalized location yields an equal value.
    pub fn normalize<T: TreeAccess + ?Sized>(&self, tree: &T) -> Result<Self, CaretError> {
        Ok(Location::at(self.node, self.normalized_offset(tree)?))
    }

    /// Total document order over locations in one tree.
    ///
    /// Same-node locations compare by offset. Locations in disjoint
    /// subtrees follow their subtree order. When one location's node
    /// contains the other's, the containing location is before the nested
    /// one iff its offset does not point past the child leading toward it.
    pub fn compare<T: TreeAccess + ?Sized>(
        &self,
        tree: &T,
        other: &Location,
    ) -> Result<Ordering, CaretError> {
        if self.node == other.node {
            return Ok(self.offset.cmp(&other.offset));
        }
        match relate_detailed(tree, self.node, other.node) {
            DetailedRelation::Equal => Ok(self.offset.cmp(&other.offset)),
            DetailedRelation::Ordered(ordering) => Ok(ordering),
            DetailedRelation::Contains { toward_b } => {
                if self.offset <= tree.index_in_parent(toward_b) {
                    Ok(Ordering::Less)
                } else {
                    Ok(Ordering::Greater)
                }
            }
            DetailedRelation::ContainedBy { toward_a } => {
                if other.offset <= tree.index_in_parent(toward_a) {
                    Ok(Ordering::Greater)
                } else {
                    Ok(Ordering::Less)
                }
            }
            DetailedRelation::Disconnected => Err(CaretError::DisconnectedNodes),
        }
    }
}
