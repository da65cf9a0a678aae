//! Expand / shrink selection
//!
//! Expanding grows the selection to the smallest enclosing node that is
//! strictly larger than what is already selected. Shrinking picks the largest
//! significant node strictly inside the selection.

use crate::classify::ClassifierTable;
use crate::position::{node_at_offset, node_covering};
use crate::syntax::{SyntaxNode, TextRange};

/// Smallest node strictly larger than `selection` that contains it.
///
/// With an empty selection the node under the caret is selected. The root is
/// never returned: selecting the whole file is not a structural move.
pub fn expand<N: SyntaxNode>(root: &N, selection: TextRange) -> Option<N> {
    if selection.is_empty() {
        let node = node_at_offset(root, selection.start);
        return (!node.is_root()).then_some(node);
    }

    let covering = node_covering(root, selection);
    let target = if covering.range() == selection {
        covering.ancestors().find(|a| a.range() != selection)?
    } else {
        covering
    };
    (!target.is_root()).then_some(target)
}

/// Largest significant node strictly inside `selection`.
///
/// Ties go to the earliest node in source order.
pub fn shrink<N: SyntaxNode>(root: &N, selection: TextRange, table: &ClassifierTable) -> Option<N> {
    if selection.is_empty() {
        return None;
    }

    let covering = node_covering(root, selection);
    let mut best: Option<N> = None;
    collect_largest(&covering, selection, table, &mut best);
    best
}

fn collect_largest<N: SyntaxNode>(
    node: &N,
    selection: TextRange,
    table: &ClassifierTable,
    best: &mut Option<N>,
) {
    for child in node.children() {
        let range = child.range();
        if !selection.contains_range(&range) {
            continue;
        }
        if range != selection && !range.is_empty() && table.is_significant(&child) {
            let larger = best.as_ref().is_none_or(|b| range.len() > b.range().len());
            if larger {
                *best = Some(child.clone());
            }
        }
        collect_largest(&child, selection, table, best);
    }
}
