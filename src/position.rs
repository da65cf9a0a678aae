//! Position Translator
//!
//! Maps editor positions onto tree nodes and back:
//! - caret offset → deepest enclosing node ([`node_at_offset`])
//! - selection → deepest node covering it ([`node_covering`])
//! - node → caret ([`to_caret`]) and selection ([`to_selection`])
//!
//! Ranges are half-open, so a caret sitting exactly between two siblings
//! belongs to the following one. A caret at or past the end of the root is
//! clamped onto the last byte of the file.

use crate::syntax::{SyntaxNode, TextRange};

/// The most specific node whose range contains `offset`.
///
/// Descends from `root`, at each level picking the child that contains the
/// offset, until no child does. Returns `root` itself when no child matches.
pub fn node_at_offset<N: SyntaxNode>(root: &N, offset: usize) -> N {
    let root_range = root.range();
    let offset = if offset >= root_range.end && !root_range.is_empty() {
        root_range.end - 1
    } else {
        offset
    };

    let mut current = root.clone();
    while let Some(child) = child_containing(&current, |range| range.contains(offset)) {
        current = child;
    }
    current
}

/// The most specific node whose range covers the whole `selection`.
///
/// An empty selection is treated as a caret. When several nested nodes share
/// the selection's exact range, the innermost one is returned; outward motions
/// pass over its same-range ancestors.
pub fn node_covering<N: SyntaxNode>(root: &N, selection: TextRange) -> N {
    if selection.is_empty() {
        return node_at_offset(root, selection.start);
    }

    let mut current = root.clone();
    while let Some(child) = child_containing(&current, |range| range.contains_range(&selection)) {
        current = child;
    }
    current
}

/// Caret position for a target node: its start offset.
pub fn to_caret<N: SyntaxNode>(node: &N) -> usize {
    node.range().start
}

/// Selection for a target node: its full range.
pub fn to_selection<N: SyntaxNode>(node: &N) -> TextRange {
    node.range()
}

/// The node and its ancestors, root last.
pub fn path_to_root<N: SyntaxNode>(node: &N) -> Vec<N> {
    let mut path = vec![node.clone()];
    path.extend(node.ancestors());
    path
}

fn child_containing<N, F>(node: &N, matches: F) -> Option<N>
where
    N: SyntaxNode,
    F: Fn(&TextRange) -> bool,
{
    node.children().find(|child| {
        let range = child.range();
        !range.is_empty() && matches(&range)
    })
}
