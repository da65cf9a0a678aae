//! Structural motions
//!
//! Every motion is a pure function of the tree, the current position and the
//! language's [`ClassifierTable`]:
//! - `sibling`: next/previous sibling with escalation, parent, first/last child
//! - `selection`: expand and shrink
//! - `category`: jump to the nearest function, class, statement, ...

pub mod category;
pub mod selection;
pub mod sibling;

use crate::classify::{ClassifierTable, NodeCategory};
use crate::position::node_covering;
use crate::syntax::{SyntaxNode, TextRange};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Search direction along the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// A requested cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    NextSibling,
    PreviousSibling,
    Parent,
    FirstChild,
    LastChild,
    Expand,
    Shrink,
    Next(NodeCategory),
    Previous(NodeCategory),
}

impl Motion {
    /// The plain tree moves, in the order they are usually bound.
    pub fn tree_moves() -> &'static [Motion] {
        &[
            Motion::NextSibling,
            Motion::PreviousSibling,
            Motion::Parent,
            Motion::FirstChild,
            Motion::LastChild,
        ]
    }

    /// Canonical command name, e.g. `next`, `first-child`, `prev-function`.
    pub fn name(&self) -> String {
        match self {
            Motion::NextSibling => "next".to_string(),
            Motion::PreviousSibling => "prev".to_string(),
            Motion::Parent => "parent".to_string(),
            Motion::FirstChild => "first-child".to_string(),
            Motion::LastChild => "last-child".to_string(),
            Motion::Expand => "expand".to_string(),
            Motion::Shrink => "shrink".to_string(),
            Motion::Next(category) => format!("next-{}", category),
            Motion::Previous(category) => format!("prev-{}", category),
        }
    }

    /// Whether the motion changes the extent of the selection rather than
    /// moving the caret.
    pub fn is_selection(&self) -> bool {
        matches!(self, Motion::Expand | Motion::Shrink)
    }
}

impl FromStr for Motion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase().replace('_', "-");
        let motion = match lowered.as_str() {
            "next" | "next-sibling" => Motion::NextSibling,
            "prev" | "previous" | "prev-sibling" | "previous-sibling" => Motion::PreviousSibling,
            "parent" | "up" => Motion::Parent,
            "first-child" | "child" | "down" => Motion::FirstChild,
            "last-child" => Motion::LastChild,
            "expand" => Motion::Expand,
            "shrink" => Motion::Shrink,
            other => {
                if let Some(category) = other.strip_prefix("next-") {
                    Motion::Next(parse_category(category, s)?)
                } else if let Some(category) = other
                    .strip_prefix("prev-")
                    .or_else(|| other.strip_prefix("previous-"))
                {
                    Motion::Previous(parse_category(category, s)?)
                } else {
                    return Err(Error::UnknownMotion(s.to_string()));
                }
            }
        };
        Ok(motion)
    }
}

fn parse_category(category: &str, motion: &str) -> Result<NodeCategory> {
    category
        .parse()
        .map_err(|_| Error::UnknownMotion(motion.to_string()))
}

impl std::fmt::Display for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compute the target of `motion` from the current caret/selection.
///
/// The current node is the deepest node covering `selection` (or under the
/// caret when the selection is empty). Returns `None` when no movement is
/// possible.
pub fn locate<N: SyntaxNode>(
    root: &N,
    selection: TextRange,
    motion: Motion,
    table: &ClassifierTable,
) -> Option<N> {
    match motion {
        Motion::Expand => return selection::expand(root, selection),
        Motion::Shrink => return selection::shrink(root, selection, table),
        _ => {}
    }

    let current = node_covering(root, selection);
    tracing::debug!(?current, %motion, "resolved current node");

    match motion {
        Motion::NextSibling => sibling::sibling(&current, Direction::Forward, table),
        Motion::PreviousSibling => sibling::sibling(&current, Direction::Backward, table),
        Motion::Parent => sibling::parent(&current, table),
        Motion::FirstChild => sibling::child(&current, Direction::Forward, table),
        Motion::LastChild => sibling::child(&current, Direction::Backward, table),
        Motion::Next(category) => {
            category::find(root, &current, category, Direction::Forward, table)
        }
        Motion::Previous(category) => {
            category::find(root, &current, category, Direction::Backward, table)
        }
        Motion::Expand | Motion::Shrink => None,
    }
}
