//! Bounded navigation space
//!
//! An immutable [min, max] region over one tree, carrying a relevance
//! model. Exposes containment queries, irrelevant-node escaping,
//! forward/backward stepping between adjacent caret positions, and lazy
//! iteration over every position in the region.

use super::location::Location;
use super::relevance::{is_relevant, AllNodes, Relevance};
use crate::dom::{NodeId, NodeKind, TreeAccess};
use crate::error::CaretError;
use log::trace;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// A bounded, relevance-aware region of a tree.
///
/// Invariants, enforced at construction: both endpoint nodes pass the
/// combined relevance test, and `max` never precedes `min` (`min == max`
/// is a legal zero-width space). The space borrows the tree for its
/// lifetime and never mutates it.
pub struct Space<'t, T: TreeAccess + ?Sized, R: Relevance<T> = AllNodes> {
    tree: &'t T,
    min: Location,
    max: Location,
    relevance: R,
}

impl<'t, T: TreeAccess + ?Sized, R: Relevance<T>> Space<'t, T, R> {
    /// Build a space over `[min, max]`
    pub fn new(
        tree: &'t T,
        min: Location,
        max: Location,
        relevance: R,
    ) -> Result<Self, CaretError> {
        if !is_relevant(tree, &relevance, min.node()) || !is_relevant(tree, &relevance, max.node())
        {
            return Err(CaretError::IrrelevantBoundary);
        }
        if min.compare(tree, &max)? == Ordering::Greater {
            return Err(CaretError::ReversedRange);
        }
        Ok(Space {
            tree,
            min,
            max,
            relevance,
        })
    }

    /// Space spanning everything under `node`: from `(node, 0)` to
    /// `(node, child count)`
    pub fn spanning(tree: &'t T, node: NodeId, relevance: R) -> Result<Self, CaretError> {
        let min = Location::at(node, 0);
        let max = Location::at(node, tree.children_of(node).len());
        Self::new(tree, min, max, relevance)
    }

    /// The tree this space reads from
    pub fn tree(&self) -> &'t T {
        self.tree
    }

    /// Lower bound (inclusive)
    pub fn min(&self) -> Location {
        self.min
    }

    /// Upper bound (inclusive)
    pub fn max(&self) -> Location {
        self.max
    }

    /// Combined relevance test for one node
    pub fn is_relevant_node(&self, node: NodeId) -> bool {
        is_relevant(self.tree, &self.relevance, node)
    }

    /// True when `loc` lies within `[min, max]`. A location under a
    /// disconnected root is reported as outside rather than as an error.
    #[must_use]
    pub fn contains(&self, loc: &Location) -> bool {
        matches!(
            self.min.compare(self.tree, loc),
            Ok(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.max.compare(self.tree, loc),
            Ok(Ordering::Greater | Ordering::Equal)
        )
    }

    /// True when `node` itself sits within the space, i.e. the location
    /// pointing at it is contained. Roots have no such location.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        match Location::before_node(self.tree, node) {
            Ok(loc) => self.contains(&loc),
            Err(_) => false,
        }
    }

    /// Nearest relevant, normalized location for `loc`.
    ///
    /// When `loc` sits inside a contextually irrelevant subtree the result
    /// is the location pointing at the outermost irrelevant ancestor;
    /// otherwise the normalized input comes back unchanged. Idempotent on
    /// relevant, normalized locations.
    pub fn escape_irrelevant(&self, loc: &Location) -> Result<Location, CaretError> {
        if !self.contains(loc) {
            return Err(CaretError::OutOfScope);
        }
        let normalized = loc.normalize(self.tree)?;

        // Ancestors of the location's node that sit inside the space,
        // innermost first. The walk stops before the boundary node, whose
        // own pointing location already lies outside the region.
        let mut chain: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut current = Some(normalized.node());
        while let Some(node) = current {
            if !self.contains_node(node) {
                break;
            }
            chain.push(node);
            current = self.tree.parent_of(node);
        }

        // Scan outermost-first: the first irrelevant entry makes every
        // node nested inside it unreachable, so the caret lands on the
        // location pointing at that entry. Its parent either passed this
        // scan already or is the space boundary, which is relevant by the
        // construction invariant.
        for &node in chain.iter().rev() {
            if !self.is_relevant_node(node) {
                trace!("escaping irrelevant subtree rooted at node {node}");
                return Location::before_node(self.tree, node);
            }
        }
        Ok(normalized)
    }

    /// Adjacent relevant location after `start`, or None at the region end
    pub fn next(&self, start: &Location) -> Result<Option<Location>, CaretError> {
        let current = self.escape_irrelevant(start)?;
        Ok(self
            .step_forward(&current)
            .filter(|candidate| self.contains(candidate)))
    }

    /// Adjacent relevant location before `start`, or None at the region
    /// start
    pub fn previous(&self, start: &Location) -> Result<Option<Location>, CaretError> {
        let current = self.escape_irrelevant(start)?;
        Ok(self
            .step_backward(&current)
            .filter(|candidate| self.contains(candidate)))
    }

    /// One forward step from an escaped, normalized location, ignoring the
    /// space bounds (the caller clips).
    fn step_forward(&self, current: &Location) -> Option<Location> {
        let node = current.node();
        let offset = current.offset();
        match self.tree.kind_of(node) {
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::Element => {
                match self.tree.children_of(node).get(offset).copied() {
                    None => self.ascend_after(node),
                    Some(child) if self.is_relevant_node(child) => Some(Location::at(child, 0)),
                    // Irrelevant children are stepped past one at a time so
                    // relevant nodes nested between them stay reachable.
                    Some(_) => Some(Location::at(node, offset + 1)),
                }
            }
            NodeKind::Text => {
                if offset + 1 <= self.tree.text_len_of(node) {
                    Some(Location::at(node, offset + 1))
                } else {
                    self.ascend_after(node)
                }
            }
            // Escaping already rejected the kinds that carry no caret
            NodeKind::Comment | NodeKind::ProcessingInstruction => None,
        }
    }

    /// Mirror image of `step_forward`
    fn step_backward(&self, current: &Location) -> Option<Location> {
        let node = current.node();
        let offset = current.offset();
        match self.tree.kind_of(node) {
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::Element => {
                if offset == 0 {
                    return self.ascend_before(node);
                }
                let child = self.tree.children_of(node)[offset - 1];
                if self.is_relevant_node(child) {
                    Some(Location::at(child, self.end_offset_of(child)))
                } else {
                    Some(Location::at(node, offset - 1))
                }
            }
            NodeKind::Text => {
                if offset >= 1 {
                    Some(Location::at(node, offset - 1))
                } else {
                    self.ascend_before(node)
                }
            }
            NodeKind::Comment | NodeKind::ProcessingInstruction => None,
        }
    }

    /// Parent location just after `node`, or None at a root
    fn ascend_after(&self, node: NodeId) -> Option<Location> {
        Location::after_node(self.tree, node).ok()
    }

    /// Parent location pointing directly at `node`, or None at a root
    fn ascend_before(&self, node: NodeId) -> Option<Location> {
        Location::before_node(self.tree, node).ok()
    }

    /// Last caret position inside `node`
    fn end_offset_of(&self, node: NodeId) -> usize {
        match self.tree.kind_of(node) {
            NodeKind::Text => self.tree.text_len_of(node),
            _ => self.tree.children_of(node).len(),
        }
    }

    /// Lazy walk over every position from `min` to `max` in document
    /// order. Each call produces a fresh, restartable sequence.
    pub fn iter_forward(&self) -> Forward<'_, 't, T, R> {
        Forward {
            space: self,
            current: Some(self.min),
        }
    }

    /// Lazy walk over every position from `max` back to `min`
    pub fn iter_backward(&self) -> Backward<'_, 't, T, R> {
        Backward {
            space: self,
            current: Some(self.max),
        }
    }
}

/// Pull iterator for `iter_forward` - no state beyond the current location
pub struct Forward<'s, 't, T: TreeAccess + ?Sized, R: Relevance<T>> {
    space: &'s Space<'t, T, R>,
    current: Option<Location>,
}

impl<'s, 't, T: TreeAccess + ?Sized, R: Relevance<T>> Iterator for Forward<'s, 't, T, R> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let current = self.current.take()?;
        // Stepping off a yielded location cannot fail: every yielded value
        // is contained and addressable.
        self.current = self.space.next(&current).ok().flatten();
        Some(current)
    }
}

/// Pull iterator for `iter_backward`
pub struct Backward<'s, 't, T: TreeAccess + ?Sized, R: Relevance<T>> {
    space: &'s Space<'t, T, R>,
    current: Option<Location>,
}

impl<'s, 't, T: TreeAccess + ?Sized, R: Relevance<T>> Iterator for Backward<'s, 't, T, R> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let current = self.current.take()?;
        self.current = self.space.previous(&current).ok().flatten();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Tree;

    fn sample() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
        // root[ a[ "hi" ], b ]
        let mut tree = Tree::new();
        let root = tree.add_element(None, "root");
        let a = tree.add_element(Some(root), "a");
        let text = tree.add_text(Some(a), "hi");
        let b = tree.add_element(Some(root), "b");
        (tree, root, a, text, b)
    }

    #[test]
    fn test_reversed_range_rejected() {
        let (tree, root, ..) = sample();
        let result = Space::new(
            &tree,
            Location::at(root, 2),
            Location::at(root, 0),
            AllNodes,
        );
        assert!(matches!(result, Err(CaretError::ReversedRange)));
    }

    #[test]
    fn test_irrelevant_boundary_rejected() {
        let mut tree = Tree::new();
        let root = tree.add_element(None, "root");
        let comment = tree.add_comment(Some(root), "c");

        // Kind layer
        let by_kind = Space::new(
            &tree,
            Location::at(comment, 0),
            Location::at(root, 1),
            AllNodes,
        );
        assert!(matches!(by_kind, Err(CaretError::IrrelevantBoundary)));

        // Caller layer
        let none = |_: &Tree, _: NodeId| false;
        let by_caller = Space::spanning(&tree, root, none);
        assert!(matches!(by_caller, Err(CaretError::IrrelevantBoundary)));
    }

    #[test]
    fn test_disconnected_bounds_propagate() {
        let mut tree = Tree::new();
        let one = tree.add_element(None, "one");
        let two = tree.add_element(None, "two");

        let result = Space::new(
            &tree,
            Location::at(one, 0),
            Location::at(two, 0),
            AllNodes,
        );
        assert!(matches!(result, Err(CaretError::DisconnectedNodes)));
    }

    #[test]
    fn test_spanning_bounds() {
        let (tree, root, ..) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();
        assert_eq!(space.min(), Location::at(root, 0));
        assert_eq!(space.max(), Location::at(root, 2));
    }

    #[test]
    fn test_contains() {
        let (tree, root, a, text, b) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();

        assert!(space.contains(&Location::at(root, 0)));
        assert!(space.contains(&Location::at(root, 2)));
        assert!(space.contains(&Location::at(text, 1)));
        assert!(space.contains(&Location::at(b, 0)));
        assert!(!space.contains(&Location::at(root, 3)));

        assert!(space.contains_node(a));
        assert!(space.contains_node(text));
        // The boundary node itself has no pointing location inside the
        // region (and roots have none at all)
        assert!(!space.contains_node(root));
    }

    #[test]
    fn test_contains_disconnected_is_false() {
        let mut tree = Tree::new();
        let root = tree.add_element(None, "root");
        tree.add_text(Some(root), "x");
        let other = tree.add_element(None, "other");

        let space = Space::spanning(&tree, root, AllNodes).unwrap();
        assert!(!space.contains(&Location::at(other, 0)));
        assert!(!space.contains_node(other));
    }

    #[test]
    fn test_escape_keeps_relevant_locations() {
        let (tree, root, _, text, _) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();

        let loc = Location::at(text, 1);
        assert_eq!(space.escape_irrelevant(&loc), Ok(loc));
        // Idempotent
        let escaped = space.escape_irrelevant(&loc).unwrap();
        assert_eq!(space.escape_irrelevant(&escaped), Ok(escaped));
    }

    #[test]
    fn test_escape_normalizes() {
        let (tree, root, _, text, _) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();
        assert_eq!(
            space.escape_irrelevant(&Location::at(text, 2)),
            Ok(Location::at(text, 2))
        );
        // (a, 5) is within the region by document order and clamps to (a, 1)
        let a = tree.children_of(root)[0];
        assert_eq!(
            space.escape_irrelevant(&Location::at(a, 5)),
            Ok(Location::at(a, 1))
        );
    }

    #[test]
    fn test_escape_leaves_irrelevant_subtree() {
        let (tree, root, a, text, _) = sample();
        let not_a = |tree: &Tree, node: NodeId| tree.name(node) != Some("a");
        let space = Space::spanning(&tree, root, not_a).unwrap();

        // Anything inside the excluded subtree lands on the location
        // pointing at its root
        assert_eq!(
            space.escape_irrelevant(&Location::at(text, 1)),
            Ok(Location::before_node(&tree, a).unwrap())
        );
        assert_eq!(
            space.escape_irrelevant(&Location::at(a, 0)),
            Ok(Location::at(root, 0))
        );
    }

    #[test]
    fn test_escape_out_of_scope() {
        let (tree, root, a, ..) = sample();
        let space = Space::new(
            &tree,
            Location::at(a, 0),
            Location::at(a, 1),
            AllNodes,
        )
        .unwrap();
        assert_eq!(
            space.escape_irrelevant(&Location::at(root, 2)),
            Err(CaretError::OutOfScope)
        );
    }

    #[test]
    fn test_next_descends_into_relevant_child() {
        let (tree, root, a, text, b) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();

        assert_eq!(space.next(&Location::at(root, 0)), Ok(Some(Location::at(a, 0))));
        assert_eq!(space.next(&Location::at(a, 0)), Ok(Some(Location::at(text, 0))));
        assert_eq!(space.next(&Location::at(text, 2)), Ok(Some(Location::at(a, 1))));
        assert_eq!(space.next(&Location::at(a, 1)), Ok(Some(Location::at(root, 1))));
        assert_eq!(space.next(&Location::at(root, 1)), Ok(Some(Location::at(b, 0))));
        assert_eq!(space.next(&Location::at(b, 0)), Ok(Some(Location::at(root, 2))));
        // At max the region is exhausted
        assert_eq!(space.next(&Location::at(root, 2)), Ok(None));
    }

    #[test]
    fn test_previous_descends_to_child_end() {
        let (tree, root, a, text, b) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();

        assert_eq!(
            space.previous(&Location::at(root, 2)),
            Ok(Some(Location::at(b, 0)))
        );
        assert_eq!(
            space.previous(&Location::at(b, 0)),
            Ok(Some(Location::at(root, 1)))
        );
        assert_eq!(
            space.previous(&Location::at(root, 1)),
            Ok(Some(Location::at(a, 1)))
        );
        assert_eq!(
            space.previous(&Location::at(a, 1)),
            Ok(Some(Location::at(text, 2)))
        );
        assert_eq!(space.previous(&Location::at(root, 0)), Ok(None));
    }

    #[test]
    fn test_step_past_irrelevant_child_one_at_a_time() {
        // root[ a, b, c ] with b irrelevant: the caret crosses b's slot
        // without descending, one offset per step
        let mut tree = Tree::new();
        let root = tree.add_element(None, "root");
        let a = tree.add_element(Some(root), "a");
        tree.add_element(Some(root), "b");
        let c = tree.add_element(Some(root), "c");

        let not_b = |tree: &Tree, node: NodeId| tree.name(node) != Some("b");
        let space = Space::spanning(&tree, root, not_b).unwrap();

        assert_eq!(space.next(&Location::at(a, 0)), Ok(Some(Location::at(root, 1))));
        assert_eq!(
            space.next(&Location::at(root, 1)),
            Ok(Some(Location::at(root, 2)))
        );
        assert_eq!(space.next(&Location::at(root, 2)), Ok(Some(Location::at(c, 0))));

        // And the mirror image going backward
        assert_eq!(
            space.previous(&Location::at(c, 0)),
            Ok(Some(Location::at(root, 2)))
        );
        assert_eq!(
            space.previous(&Location::at(root, 2)),
            Ok(Some(Location::at(root, 1)))
        );
        assert_eq!(
            space.previous(&Location::at(root, 1)),
            Ok(Some(Location::at(a, 0)))
        );
    }

    #[test]
    fn test_zero_width_space() {
        let (tree, root, ..) = sample();
        let loc = Location::at(root, 1);
        let space = Space::new(&tree, loc, loc, AllNodes).unwrap();

        assert!(space.contains(&loc));
        assert_eq!(space.next(&loc), Ok(None));
        assert_eq!(space.previous(&loc), Ok(None));
        assert_eq!(space.iter_forward().collect::<Vec<_>>(), vec![loc]);
    }

    #[test]
    fn test_iterators_are_restartable() {
        let (tree, root, ..) = sample();
        let space = Space::spanning(&tree, root, AllNodes).unwrap();

        let first: Vec<_> = space.iter_forward().take(3).collect();
        let second: Vec<_> = space.iter_forward().take(3).collect();
        assert_eq!(first, second);
    }
}
