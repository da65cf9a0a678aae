//! Tree-sitter node wrapper

use super::{SyntaxNode, TextRange};
use std::fmt;
use tree_sitter::Node;

/// [`SyntaxNode`] view over a tree-sitter node.
///
/// Borrows the tree the node came from; nothing is copied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TsNode<'tree>(Node<'tree>);

impl<'tree> TsNode<'tree> {
    pub fn new(node: Node<'tree>) -> Self {
        Self(node)
    }

    /// The wrapped tree-sitter node.
    pub fn inner(&self) -> Node<'tree> {
        self.0
    }
}

impl<'tree> From<Node<'tree>> for TsNode<'tree> {
    fn from(node: Node<'tree>) -> Self {
        Self(node)
    }
}

impl fmt::Debug for TsNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.0.kind(), self.0.start_byte(), self.0.end_byte())
    }
}

impl SyntaxNode for TsNode<'_> {
    fn kind(&self) -> &str {
        self.0.kind()
    }

    fn range(&self) -> TextRange {
        TextRange::new(self.0.start_byte(), self.0.end_byte())
    }

    fn is_named(&self) -> bool {
        self.0.is_named()
    }

    fn child_count(&self) -> usize {
        self.0.child_count()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.0.child(index).map(Self)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().map(Self)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_sibling().map(Self)
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.0.prev_sibling().map(Self)
    }
}
