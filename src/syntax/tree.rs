//! Arena-owned syntax tree
//!
//! Children are owned by their parent's child list; parent links are plain
//! ids used only for upward traversal, so there are no ownership cycles even
//! though the tree can be walked in both directions.
//!
//! Hosts with their own parser can lower its output into a [`SyntaxTree`]
//! with [`TreeBuilder`] and navigate it like any tree-sitter tree.

use super::{SyntaxNode, TextRange};
use std::fmt;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
struct NodeData {
    kind: String,
    named: bool,
    range: TextRange,
    parent: Option<NodeId>,
    /// Position in the parent's child list
    index: usize,
    children: Vec<NodeId>,
}

/// An immutable tree of nodes; the root is always the first node.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// View of the root node.
    pub fn root(&self) -> TreeNode<'_> {
        TreeNode {
            tree: self,
            id: NodeId(0),
        }
    }

    /// View of an arbitrary node, if the id belongs to this tree.
    pub fn node(&self, id: NodeId) -> Option<TreeNode<'_>> {
        (id.0 < self.nodes.len()).then_some(TreeNode { tree: self, id })
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// Borrowed view of one node in a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct TreeNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> TreeNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a NodeData {
        self.tree.data(self.id)
    }

    fn view(&self, id: NodeId) -> TreeNode<'a> {
        TreeNode {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for TreeNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for TreeNode<'_> {}

impl fmt::Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        write!(f, "{}@{}", data.kind, data.range)
    }
}

impl SyntaxNode for TreeNode<'_> {
    fn kind(&self) -> &str {
        &self.data().kind
    }

    fn range(&self) -> TextRange {
        self.data().range
    }

    fn is_named(&self) -> bool {
        self.data().named
    }

    fn child_count(&self) -> usize {
        self.data().children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.data().children.get(index).map(|&id| self.view(id))
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.view(id))
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        parent.child(self.data().index + 1)
    }

    fn prev_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let index = self.data().index.checked_sub(1)?;
        parent.child(index)
    }
}

/// Builds a [`SyntaxTree`] top-down in source order.
///
/// ```
/// use treejump::syntax::{SyntaxNode, TreeBuilder};
///
/// let tree = TreeBuilder::new("block", 0, 12)
///     .token("{", 0, 1)
///     .open("statement", 2, 10)
///     .leaf("identifier", 2, 5)
///     .close()
///     .token("}", 11, 12)
///     .build();
///
/// assert_eq!(tree.root().child_count(), 3);
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    /// Start a tree with the given root.
    pub fn new(kind: impl Into<String>, start: usize, end: usize) -> Self {
        let root = NodeData {
            kind: kind.into(),
            named: true,
            range: TextRange::new(start, end),
            parent: None,
            index: 0,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            open: vec![NodeId(0)],
        }
    }

    /// Add a named node and make it the parent of subsequent nodes until
    /// [`close`](Self::close) is called.
    pub fn open(mut self, kind: impl Into<String>, start: usize, end: usize) -> Self {
        let id = self.push(kind.into(), true, start, end);
        self.open.push(id);
        self
    }

    /// Finish the most recently opened node.
    pub fn close(mut self) -> Self {
        if self.open.len() > 1 {
            self.open.pop();
        }
        self
    }

    /// Add a named node without children.
    pub fn leaf(mut self, kind: impl Into<String>, start: usize, end: usize) -> Self {
        self.push(kind.into(), true, start, end);
        self
    }

    /// Add an anonymous token (keyword, punctuation).
    pub fn token(mut self, kind: impl Into<String>, start: usize, end: usize) -> Self {
        self.push(kind.into(), false, start, end);
        self
    }

    pub fn build(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }

    fn push(&mut self, kind: String, named: bool, start: usize, end: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = *self.open.last().unwrap_or(&NodeId(0));
        let parent_data = &mut self.nodes[parent.0];
        debug_assert!(
            parent_data.range.contains_range(&TextRange::new(start, end)),
            "child {kind} {start}..{end} escapes parent {}",
            parent_data.range
        );
        let index = parent_data.children.len();
        parent_data.children.push(id);
        self.nodes.push(NodeData {
            kind,
            named,
            range: TextRange::new(start, end),
            parent: Some(parent),
            index,
            children: Vec::new(),
        });
        id
    }
}
