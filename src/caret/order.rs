//! Document-order relation between nodes
//!
//! One relational query combining order and containment, implemented as an
//! explicit ancestor-chain walk to the lowest common ancestor. Nothing here
//! relies on a host-provided ordering primitive; parent links are enough.

use crate::dom::{NodeId, TreeAccess};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Ancestor chain, root first. Sized for shallow documents; deep trees
/// spill to the heap.
type RootPath = SmallVec<[NodeId; 8]>;

/// How node `a` relates to node `b` within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Same node
    Equal,
    /// `a` ends before `b` begins
    Precedes,
    /// `a` begins after `b` ends
    Follows,
    /// `a` is a strict ancestor of `b`
    Contains,
    /// `a` is a strict descendant of `b`
    ContainedBy,
    /// `a` and `b` live under different roots
    Disconnected,
}

/// Relation plus the divergence data the location comparator needs for its
/// tie-break. `relate` folds this down to the plain `Relation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailedRelation {
    Equal,
    /// Disjoint subtrees, strictly ordered
    Ordered(Ordering),
    /// `a` contains `b`; `toward_b` is the child of `a` on the path to `b`
    Contains { toward_b: NodeId },
    /// `b` contains `a`; `toward_a` is the child of `b` on the path to `a`
    ContainedBy { toward_a: NodeId },
    Disconnected,
}

/// Chain of ancestors from the root down to `id` itself
fn root_path<T: TreeAccess + ?Sized>(tree: &T, id: NodeId) -> RootPath {
    let mut path = RootPath::new();
    let mut current = Some(id);
    while let Some(node) = current {
        path.push(node);
        current = tree.parent_of(node);
    }
    path.reverse();
    path
}

pub(crate) fn relate_detailed<T: TreeAccess + ?Sized>(
    tree: &T,
    a: NodeId,
    b: NodeId,
) -> DetailedRelation {
    if a == b {
        return DetailedRelation::Equal;
    }

    let path_a = root_path(tree, a);
    let path_b = root_path(tree, b);
    if path_a[0] != path_b[0] {
        return DetailedRelation::Disconnected;
    }

    // Length of the shared prefix; at least 1 since the roots match.
    let mut shared = 1;
    while shared < path_a.len() && shared < path_b.len() && path_a[shared] == path_b[shared] {
        shared += 1;
    }

    if shared == path_a.len() {
        return DetailedRelation::Contains {
            toward_b: path_b[shared],
        };
    }
    if shared == path_b.len() {
        return DetailedRelation::ContainedBy {
            toward_a: path_a[shared],
        };
    }

    // Both paths continue below the lowest common ancestor; the diverging
    // entries are distinct children of it, ordered by child position.
    let index_a = tree.index_in_parent(path_a[shared]);
    let index_b = tree.index_in_parent(path_b[shared]);
    DetailedRelation::Ordered(index_a.cmp(&index_b))
}

/// Classify the relation between two nodes with a single tree query
pub fn relate<T: TreeAccess + ?Sized>(tree: &T, a: NodeId, b: NodeId) -> Relation {
    match relate_detailed(tree, a, b) {
        DetailedRelation::Equal => Relation::Equal,
        DetailedRelation::Ordered(Ordering::Less) => Relation::Precedes,
        DetailedRelation::Ordered(_) => Relation::Follows,
        DetailedRelation::Contains { .. } => Relation::Contains,
        DetailedRelation::ContainedBy { .. } => Relation::ContainedBy,
        DetailedRelation::Disconnected => Relation::Disconnected,
    }
}
