//! Sibling Locator
//!
//! Sibling moves escalate: when the current level has no significant node in
//! the requested direction, the search retries from the parent, so moving
//! past the last statement of a nested block lands on whatever follows the
//! block. Only the root, having no parent, ends the search empty-handed.

use super::Direction;
use crate::classify::ClassifierTable;
use crate::syntax::SyntaxNode;

/// Next significant node after (or before) `node`, escalating through
/// ancestors when a level is exhausted.
pub fn sibling<N: SyntaxNode>(
    node: &N,
    direction: Direction,
    table: &ClassifierTable,
) -> Option<N> {
    let mut level = node.clone();
    loop {
        if let Some(found) = scan_siblings(&level, direction, table) {
            return Some(found);
        }
        level = level.parent()?;
        tracing::trace!(?level, "escalating sibling search");
    }
}

/// First significant sibling of `node` in `direction`, without escalating.
pub fn scan_siblings<N: SyntaxNode>(
    node: &N,
    direction: Direction,
    table: &ClassifierTable,
) -> Option<N> {
    let mut candidate = step(node, direction);
    while let Some(current) = candidate {
        if table.is_significant(&current) {
            return Some(current);
        }
        candidate = step(&current, direction);
    }
    None
}

/// Nearest significant ancestor that is strictly larger than `node`.
///
/// Ancestors sharing the node's range are passed over, since selecting one
/// would leave the host's selection where it was.
pub fn parent<N: SyntaxNode>(node: &N, table: &ClassifierTable) -> Option<N> {
    let range = node.range();
    node.ancestors()
        .find(|ancestor| ancestor.range() != range && table.is_significant(ancestor))
}

/// First (forward) or last (backward) significant direct child.
pub fn child<N: SyntaxNode>(node: &N, direction: Direction, table: &ClassifierTable) -> Option<N> {
    match direction {
        Direction::Forward => node.children().find(|c| table.is_significant(c)),
        Direction::Backward => node.children().rev().find(|c| table.is_significant(c)),
    }
}

fn step<N: SyntaxNode>(node: &N, direction: Direction) -> Option<N> {
    match direction {
        Direction::Forward => node.next_sibling(),
        Direction::Backward => node.prev_sibling(),
    }
}
