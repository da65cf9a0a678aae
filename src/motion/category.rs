//! Category jumps
//!
//! Finds the nearest node of a [`NodeCategory`] before or after the current
//! node in document order. Category membership comes from the language table,
//! independent of significance, so comments can be targets here even though
//! sibling moves skip them.

use super::Direction;
use crate::classify::{ClassifierTable, NodeCategory};
use crate::syntax::SyntaxNode;

/// Nearest node of `category` starting after (forward) or before (backward)
/// the start of `current`.
///
/// Forward, the first such node in pre-order wins, so an enclosing node that
/// starts at the same offset never matches. Backward, the node with the
/// greatest start wins; among nested nodes sharing that start the outermost
/// is chosen.
pub fn find<N: SyntaxNode>(
    root: &N,
    current: &N,
    category: NodeCategory,
    direction: Direction,
    table: &ClassifierTable,
) -> Option<N> {
    let anchor = current.range().start;
    match direction {
        Direction::Forward => first_after(root, anchor, category, table),
        Direction::Backward => last_before(root, anchor, category, table),
    }
}

fn first_after<N: SyntaxNode>(
    node: &N,
    anchor: usize,
    category: NodeCategory,
    table: &ClassifierTable,
) -> Option<N> {
    for child in node.children() {
        let range = child.range();
        if range.end <= anchor {
            continue;
        }
        if range.start > anchor && table.is_category(&child, category) {
            return Some(child);
        }
        if let Some(found) = first_after(&child, anchor, category, table) {
            return Some(found);
        }
    }
    None
}

fn last_before<N: SyntaxNode>(
    node: &N,
    anchor: usize,
    category: NodeCategory,
    table: &ClassifierTable,
) -> Option<N> {
    for child in node.children().rev() {
        let range = child.range();
        if range.start >= anchor {
            continue;
        }
        let matches = table.is_category(&child, category);
        if let Some(found) = last_before(&child, anchor, category, table) {
            // a descendant sharing the child's start loses to the child
            if !(matches && found.range().start == range.start) {
                return Some(found);
            }
        }
        if matches {
            return Some(child);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::node_at_offset;
    use crate::syntax::{SyntaxTree, TextRange, TreeBuilder};

    fn table() -> ClassifierTable {
        ClassifierTable::new()
            .trivial(["comment"])
            .with_category(NodeCategory::Function, ["function"])
            .with_category(NodeCategory::Comment, ["comment"])
    }

    // f1 { f2 { x } } // c  f3 { y }
    fn functions() -> SyntaxTree {
        TreeBuilder::new("file", 0, 60)
            .open("function", 0, 30)
            .leaf("name", 0, 2)
            .open("body", 3, 30)
            .open("function", 5, 20)
            .leaf("name", 5, 7)
            .leaf("statement", 10, 12)
            .close()
            .leaf("statement", 22, 28)
            .close()
            .close()
            .leaf("comment", 31, 37)
            .open("function", 40, 58)
            .leaf("name", 40, 42)
            .leaf("statement", 45, 50)
            .close()
            .build()
    }

    #[test]
    fn test_forward_finds_nested_then_following() {
        let tree = functions();
        let root = tree.root();
        let table = table();

        let start = node_at_offset(&root, 1);
        let f2 = find(&root, &start, NodeCategory::Function, Direction::Forward, &table).unwrap();
        assert_eq!(f2.range(), TextRange::new(5, 20));

        let f3 = find(&root, &f2, NodeCategory::Function, Direction::Forward, &table).unwrap();
        assert_eq!(f3.range(), TextRange::new(40, 58));
        assert!(find(&root, &f3, NodeCategory::Function, Direction::Forward, &table).is_none());
    }

    #[test]
    fn test_forward_skips_enclosing_function() {
        let tree = functions();
        let root = tree.root();
        let caret = node_at_offset(&root, 23);

        let next =
            find(&root, &caret, NodeCategory::Function, Direction::Forward, &table()).unwrap();
        assert_eq!(next.range().start, 40);
    }

    #[test]
    fn test_backward_prefers_closest_start() {
        let tree = functions();
        let root = tree.root();
        let table = table();

        // from inside f3 the enclosing function itself starts before the caret
        let caret = node_at_offset(&root, 46);
        let f3 = find(&root, &caret, NodeCategory::Function, Direction::Backward, &table).unwrap();
        assert_eq!(f3.range().start, 40);

        let f2 = find(&root, &f3, NodeCategory::Function, Direction::Backward, &table).unwrap();
        assert_eq!(f2.range(), TextRange::new(5, 20));

        let f1 = find(&root, &f2, NodeCategory::Function, Direction::Backward, &table).unwrap();
        assert_eq!(f1.range(), TextRange::new(0, 30));
        assert!(find(&root, &f1, NodeCategory::Function, Direction::Backward, &table).is_none());
    }

    #[test]
    fn test_backward_outermost_on_shared_start() {
        let tree = TreeBuilder::new("file", 0, 30)
            .open("function", 0, 20)
            .open("function", 0, 10)
            .leaf("name", 0, 3)
            .close()
            .close()
            .leaf("statement", 22, 28)
            .build();
        let root = tree.root();
        let caret = node_at_offset(&root, 23);

        let found =
            find(&root, &caret, NodeCategory::Function, Direction::Backward, &table()).unwrap();
        assert_eq!(found.range(), TextRange::new(0, 20));
    }

    #[test]
    fn test_comments_are_targets() {
        let tree = functions();
        let root = tree.root();
        let caret = node_at_offset(&root, 11);

        let comment =
            find(&root, &caret, NodeCategory::Comment, Direction::Forward, &table()).unwrap();
        assert_eq!(comment.range(), TextRange::new(31, 37));
        assert!(find(&root, &caret, NodeCategory::Loop, Direction::Forward, &table()).is_none());
    }
}
