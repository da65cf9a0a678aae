//! Node Classifier
//!
//! Decides whether a node is a navigation target. The decision is driven
//! entirely by a per-language [`ClassifierTable`]; the classifier carries no
//! knowledge of any particular grammar.
//!
//! Resolution order for a node kind:
//! 1. an explicit entry in the table wins
//! 2. anonymous tokens are trivial if the table says so
//! 3. punctuation-only kinds (no alphanumeric character) are trivial if the
//!    table says so
//! 4. everything else is significant, so unknown constructs stay navigable

use crate::syntax::SyntaxNode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Whether a node counts as a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Significant,
    Trivial,
}

impl Classification {
    pub fn is_significant(&self) -> bool {
        matches!(self, Classification::Significant)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Significant => "significant",
            Classification::Trivial => "trivial",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse structural families used by category jumps.
///
/// Each language maps its own node kinds onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Function, method, closure, lambda
    Function,
    /// Class, struct, enum, trait, interface, object literal
    Class,
    /// Declaration, expression or return statement
    Statement,
    /// Loops and conditionals
    Loop,
    /// Line and block comments
    Comment,
    /// Argument and parameter list entries
    Argument,
    /// Variable, constant and field declarations
    Variable,
    /// Type references in annotations and signatures
    Type,
    /// Operator tokens
    Operator,
    /// Calls, member access and compound expressions
    Expression,
    /// Macro invocations and definitions, decorators
    Macro,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Function => "function",
            NodeCategory::Class => "class",
            NodeCategory::Statement => "statement",
            NodeCategory::Loop => "loop",
            NodeCategory::Comment => "comment",
            NodeCategory::Argument => "argument",
            NodeCategory::Variable => "variable",
            NodeCategory::Type => "type",
            NodeCategory::Operator => "operator",
            NodeCategory::Expression => "expression",
            NodeCategory::Macro => "macro",
        }
    }

    pub fn all() -> &'static [NodeCategory] {
        &[
            NodeCategory::Function,
            NodeCategory::Class,
            NodeCategory::Statement,
            NodeCategory::Loop,
            NodeCategory::Comment,
            NodeCategory::Argument,
            NodeCategory::Variable,
            NodeCategory::Type,
            NodeCategory::Operator,
            NodeCategory::Expression,
            NodeCategory::Macro,
        ]
    }
}

impl FromStr for NodeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "function" | "fn" | "method" | "def" => Ok(NodeCategory::Function),
            "class" | "struct" => Ok(NodeCategory::Class),
            "statement" | "stmt" => Ok(NodeCategory::Statement),
            "loop" | "conditional" | "control" => Ok(NodeCategory::Loop),
            "comment" => Ok(NodeCategory::Comment),
            "argument" | "arg" | "parameter" | "param" => Ok(NodeCategory::Argument),
            "variable" | "var" | "field" => Ok(NodeCategory::Variable),
            "type" => Ok(NodeCategory::Type),
            "operator" | "op" => Ok(NodeCategory::Operator),
            "expression" | "expr" => Ok(NodeCategory::Expression),
            "macro" | "decorator" => Ok(NodeCategory::Macro),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind → classification table for one language.
#[derive(Debug, Clone, Default)]
pub struct ClassifierTable {
    kinds: HashMap<String, Classification>,
    categories: HashMap<NodeCategory, HashSet<String>>,
    containers: HashMap<NodeCategory, HashSet<String>>,
    anonymous_trivial: bool,
    punctuation_trivial: bool,
}

impl ClassifierTable {
    /// An empty table: every node is significant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark kinds as trivial.
    pub fn trivial<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(kinds, Classification::Trivial);
        self
    }

    /// Mark kinds as significant, overriding the token rules.
    pub fn significant<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(kinds, Classification::Significant);
        self
    }

    /// Treat anonymous grammar tokens (keywords, operators) as trivial.
    pub fn anonymous_trivial(mut self, enabled: bool) -> Self {
        self.anonymous_trivial = enabled;
        self
    }

    /// Treat kinds made only of punctuation as trivial.
    pub fn punctuation_trivial(mut self, enabled: bool) -> Self {
        self.punctuation_trivial = enabled;
        self
    }

    /// Assign kinds to a category.
    pub fn with_category<I, S>(mut self, category: NodeCategory, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(category)
            .or_default()
            .extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Every significant child of these kinds belongs to `category`.
    ///
    /// Call arguments are arbitrary expressions, so they are recognised by
    /// their list rather than by their own kind.
    pub fn with_category_container<I, S>(mut self, category: NodeCategory, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.containers
            .entry(category)
            .or_default()
            .extend(kinds.into_iter().map(Into::into));
        self
    }

    pub(crate) fn set<I, S>(&mut self, kinds: I, classification: Classification)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for kind in kinds {
            self.kinds.insert(kind.into(), classification);
        }
    }

    /// Classify a node by kind.
    pub fn classify<N: SyntaxNode>(&self, node: &N) -> Classification {
        self.classify_kind(node.kind(), node.is_named())
    }

    /// Classify a bare kind; `named` mirrors [`SyntaxNode::is_named`].
    pub fn classify_kind(&self, kind: &str, named: bool) -> Classification {
        if let Some(classification) = self.kinds.get(kind) {
            return *classification;
        }
        if self.anonymous_trivial && !named {
            return Classification::Trivial;
        }
        if self.punctuation_trivial && is_punctuation(kind) {
            return Classification::Trivial;
        }
        Classification::Significant
    }

    pub fn is_significant<N: SyntaxNode>(&self, node: &N) -> bool {
        self.classify(node).is_significant()
    }

    /// Whether the node belongs to `category`, by its own kind or as a
    /// significant child of a container kind.
    pub fn is_category<N: SyntaxNode>(&self, node: &N, category: NodeCategory) -> bool {
        if self
            .categories
            .get(&category)
            .is_some_and(|kinds| kinds.contains(node.kind()))
        {
            return true;
        }
        match self.containers.get(&category) {
            Some(containers) => {
                node.parent().is_some_and(|p| containers.contains(p.kind()))
                    && self.is_significant(node)
            }
            None => false,
        }
    }

    /// Kinds registered for `category`, sorted.
    pub fn category_kinds(&self, category: NodeCategory) -> Vec<&str> {
        let mut kinds: Vec<&str> = self
            .categories
            .get(&category)
            .map(|k| k.iter().map(String::as_str).collect())
            .unwrap_or_default();
        kinds.sort_unstable();
        kinds
    }

    /// Number of kinds with an explicit classification.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn is_punctuation(kind: &str) -> bool {
    !kind.is_empty() && !kind.chars().any(char::is_alphanumeric)
}
