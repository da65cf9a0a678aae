//! Syntax Node View
//!
//! A uniform, read-only view over a single node of any parse tree. Every
//! parser output is wrapped behind [`SyntaxNode`]; the navigation engine never
//! touches a language-specific tree type.
//!
//! Two implementations ship with the crate:
//! - [`TsNode`] wraps a tree-sitter node (all built-in languages)
//! - [`TreeNode`] views an arena-owned [`SyntaxTree`] (custom parsers, tests)
//!
//! Trees are expected to be well formed: a node's range contains each child's
//! range, and siblings are ordered and non-overlapping. Malformed trees are a
//! contract violation of the parser and are not detected here.

pub mod tree;
pub mod ts;

pub use tree::{NodeId, SyntaxTree, TreeBuilder, TreeNode};
pub use ts::TsNode;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range `[start, end)` within the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty range at `offset`, i.e. a bare caret.
    pub fn caret(offset: usize) -> Self {
        Self { start: offset, end: offset }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` falls inside the range (end excluded).
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains_range(&self, other: &TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Read-only view over one node of a parse tree.
///
/// Implementations wrap the underlying tree by reference and must be cheap to
/// clone. Two views compare equal when they denote the same node.
pub trait SyntaxNode: Clone + PartialEq + fmt::Debug {
    /// Grammar-defined node kind, e.g. `function_item` or `;`.
    fn kind(&self) -> &str;

    /// Byte range covered by this node.
    fn range(&self) -> TextRange;

    /// Whether the grammar names this node (tree-sitter distinguishes named
    /// nodes from anonymous tokens such as keywords and punctuation).
    fn is_named(&self) -> bool {
        true
    }

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// The child at `index`, in source order.
    fn child(&self, index: usize) -> Option<Self>;

    /// The enclosing node, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Lazily iterate over direct children in source order.
    ///
    /// Calling this again restarts the sequence.
    fn children(&self) -> Children<Self> {
        Children::new(self.clone())
    }

    /// The following node under the same parent.
    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let index = parent.children().position(|c| c == *self)?;
        parent.child(index + 1)
    }

    /// The preceding node under the same parent.
    fn prev_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let index = parent.children().position(|c| c == *self)?;
        index.checked_sub(1).and_then(|i| parent.child(i))
    }

    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Iterate over the enclosing nodes, innermost first. The node itself is
    /// not included.
    fn ancestors(&self) -> Ancestors<Self> {
        Ancestors {
            next: self.parent(),
        }
    }
}

/// Lazy, double-ended iterator over a node's direct children.
#[derive(Debug, Clone)]
pub struct Children<N> {
    node: N,
    front: usize,
    back: usize,
}

impl<N: SyntaxNode> Children<N> {
    fn new(node: N) -> Self {
        let back = node.child_count();
        Self { node, front: 0, back }
    }
}

impl<N: SyntaxNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.front >= self.back {
            return None;
        }
        let child = self.node.child(self.front);
        self.front += 1;
        child
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<N: SyntaxNode> DoubleEndedIterator for Children<N> {
    fn next_back(&mut self) -> Option<N> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.node.child(self.back)
    }
}

impl<N: SyntaxNode> ExactSizeIterator for Children<N> {}

/// Iterator over a node's ancestors, innermost first.
#[derive(Debug, Clone)]
pub struct Ancestors<N> {
    next: Option<N>,
}

impl<N: SyntaxNode> Iterator for Ancestors<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
