//! Tree node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.

/// Compact node identifier (index into the tree arena)
pub type NodeId = u32;

/// Kind of document node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Root of a detached document fragment
    DocumentFragment,
    /// Element node
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
    /// Processing instruction
    ProcessingInstruction,
}

impl NodeKind {
    /// True for the kinds that carry caret offsets: element, document and
    /// fragment offsets index into children, text offsets into characters.
    pub fn is_addressable(self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::Element | NodeKind::Text
        )
    }
}

/// A node in the tree arena
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Kind of this node
    pub kind: NodeKind,
    /// Parent node (None for a root)
    pub parent: Option<NodeId>,
    /// Ordered child list
    pub children: Vec<NodeId>,
    /// Position of this node in its parent's child list (0 for a root)
    pub index_in_parent: u32,
    /// Element tag or processing-instruction target
    pub name: String,
    /// Text or comment content
    pub content: String,
    /// Character count of `content`, cached at construction
    pub char_len: u32,
}

impl TreeNode {
    /// Create a new document root node
    pub fn document() -> Self {
        TreeNode {
            kind: NodeKind::Document,
            parent: None,
            children: Vec::new(),
            index_in_parent: 0,
            name: String::new(),
            content: String::new(),
            char_len: 0,
        }
    }

    /// Create a new document fragment root node
    pub fn fragment() -> Self {
        TreeNode {
            kind: NodeKind::DocumentFragment,
            ..TreeNode::document()
        }
    }

    /// Create a new element node
    pub fn element(tag: &str, parent: Option<NodeId>, index_in_parent: u32) -> Self {
        TreeNode {
            kind: NodeKind::Element,
            parent,
            children: Vec::new(),
            index_in_parent,
            name: tag.to_string(),
            content: String::new(),
            char_len: 0,
        }
    }

    /// Create a new text node
    pub fn text(content: &str, parent: Option<NodeId>, index_in_parent: u32) -> Self {
        TreeNode {
            kind: NodeKind::Text,
            parent,
            children: Vec::new(),
            index_in_parent,
            name: String::new(),
            char_len: content.chars().count() as u32,
            content: content.to_string(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str, parent: Option<NodeId>, index_in_parent: u32) -> Self {
        TreeNode {
            kind: NodeKind::Comment,
            parent,
            children: Vec::new(),
            index_in_parent,
            name: String::new(),
            content: content.to_string(),
            char_len: 0,
        }
    }

    /// Create a new processing instruction node
    pub fn processing_instruction(target: &str, parent: Option<NodeId>, index_in_parent: u32) -> Self {
        TreeNode {
            kind: NodeKind::ProcessingInstruction,
            parent,
            children: Vec::new(),
            index_in_parent,
            name: target.to_string(),
            content: String::new(),
            char_len: 0,
        }
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }
}
