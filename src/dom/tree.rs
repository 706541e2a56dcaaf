//! Tree arena - append-only document tree
//!
//! Nodes live in a single `Vec` and reference each other by index. A tree
//! is built top-down through the `add_*` methods and is never restructured
//! afterwards, so every node can cache its position in its parent.

use super::node::{NodeId, NodeKind, TreeNode};
use super::TreeAccess;

/// A document tree stored in arena format
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Create an empty arena
    pub fn new() -> Self {
        Tree { nodes: Vec::new() }
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id as usize)
    }

    /// Get the tag of an element or the target of a processing instruction
    pub fn name(&self, id: NodeId) -> Option<&str> {
        let node = self.get_node(id)?;
        match node.kind {
            NodeKind::Element | NodeKind::ProcessingInstruction => Some(&node.name),
            _ => None,
        }
    }

    /// Get the content of a text or comment node
    pub fn content(&self, id: NodeId) -> Option<&str> {
        let node = self.get_node(id)?;
        match node.kind {
            NodeKind::Text | NodeKind::Comment => Some(&node.content),
            _ => None,
        }
    }

    /// Add a parentless document root
    pub fn add_document(&mut self) -> NodeId {
        self.push(TreeNode::document())
    }

    /// Add a parentless document fragment root
    pub fn add_fragment(&mut self) -> NodeId {
        self.push(TreeNode::fragment())
    }

    /// Add an element as the last child of `parent` (or as a root)
    pub fn add_element(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let index = self.next_child_index(parent);
        let id = self.push(TreeNode::element(tag, parent, index));
        self.link_child(parent, id);
        id
    }

    /// Add a text node as the last child of `parent` (or as a root)
    pub fn add_text(&mut self, parent: Option<NodeId>, content: &str) -> NodeId {
        let index = self.next_child_index(parent);
        let id = self.push(TreeNode::text(content, parent, index));
        self.link_child(parent, id);
        id
    }

    /// Add a comment as the last child of `parent` (or as a root)
    pub fn add_comment(&mut self, parent: Option<NodeId>, content: &str) -> NodeId {
        let index = self.next_child_index(parent);
        let id = self.push(TreeNode::comment(content, parent, index));
        self.link_child(parent, id);
        id
    }

    /// Add a processing instruction as the last child of `parent`
    pub fn add_processing_instruction(&mut self, parent: Option<NodeId>, target: &str) -> NodeId {
        let index = self.next_child_index(parent);
        let id = self.push(TreeNode::processing_instruction(target, parent, index));
        self.link_child(parent, id);
        id
    }

    /// Iterate over all descendants of a node, depth-first
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.get_node(id) {
            stack.extend(node.children.iter().rev());
        }
        Descendants { tree: self, stack }
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    fn next_child_index(&self, parent: Option<NodeId>) -> u32 {
        parent.map_or(0, |id| self.nodes[id as usize].children.len() as u32)
    }

    fn link_child(&mut self, parent: Option<NodeId>, child: NodeId) {
        if let Some(parent_id) = parent {
            self.nodes[parent_id as usize].children.push(child);
        }
    }
}

/// Iterator over descendant nodes (depth-first)
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse so the first child is processed first
        if let Some(node) = self.tree.get_node(current) {
            self.stack.extend(node.children.iter().rev());
        }

        Some(current)
    }
}

impl TreeAccess for Tree {
    fn kind_of(&self, id: NodeId) -> NodeKind {
        self.nodes[id as usize].kind
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id as usize].children
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id as usize].parent
    }

    fn text_len_of(&self, id: NodeId) -> usize {
        let node = &self.nodes[id as usize];
        if node.is_text() {
            node.char_len as usize
        } else {
            0
        }
    }

    fn index_in_parent(&self, id: NodeId) -> usize {
        self.nodes[id as usize].index_in_parent as usize
    }
}
