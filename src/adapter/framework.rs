//! Core adapter framework
//!
//! Defines the trait every language adapter implements and the registry that
//! resolves adapters by language id or file path.

use crate::classify::ClassifierTable;
use crate::config::LanguageOverride;
use crate::syntax::TsNode;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tree_sitter::Tree;

use super::grammar::GrammarAdapter;

/// A parsed source file, owning its tree.
///
/// Node views borrow from this value, so it must outlive the navigation
/// request that uses them.
#[derive(Debug)]
pub struct ParsedSource {
    tree: Tree,
    len: usize,
}

impl ParsedSource {
    pub fn new(tree: Tree, len: usize) -> Self {
        Self { tree, len }
    }

    /// Root view of the tree.
    pub fn root(&self) -> TsNode<'_> {
        TsNode::new(self.tree.root_node())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Length of the parsed source in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the parser had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Trait for language adapters
///
/// An adapter couples a grammar (how to parse) with a classifier table (what
/// is worth navigating to).
pub trait LanguageAdapter: Send + Sync {
    /// Stable identifier, e.g. `rust`
    fn language_id(&self) -> &str;

    /// Get the language name (for display)
    fn language_name(&self) -> &str;

    /// Get file extensions this adapter handles, without the leading dot
    fn file_extensions(&self) -> &[String];

    /// Check if this adapter can handle a file
    fn can_handle(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_lowercase();
        self.file_extensions().iter().any(|ext| {
            let ext = ext.to_lowercase();
            name.len() > ext.len() + 1
                && name.ends_with(&ext)
                && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
        })
    }

    /// Kind classification for this language
    fn classifier(&self) -> &ClassifierTable;

    /// Parse source text into a tree
    fn parse(&self, source: &str) -> Result<ParsedSource>;
}

/// Registry of language adapters
///
/// Built once and read-only afterwards; shared freely between threads.
#[derive(Default)]
pub struct LanguageRegistry {
    adapters: Vec<Box<dyn LanguageAdapter>>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in language.
    pub fn builtin() -> Result<Self> {
        Self::with_overrides(&BTreeMap::new())
    }

    /// Registry with every built-in language, tables adjusted by user
    /// configuration keyed by language id.
    pub fn with_overrides(overrides: &BTreeMap<String, LanguageOverride>) -> Result<Self> {
        if let Some(unknown) = overrides
            .keys()
            .find(|id| !GrammarAdapter::BUILTIN.contains(&id.to_lowercase().as_str()))
        {
            return Err(Error::UnsupportedLanguage(unknown.clone()));
        }

        let mut registry = Self::new();
        for adapter in GrammarAdapter::all() {
            let mut adapter = adapter?;
            let language_id = adapter.language_id().to_string();
            let matching = overrides
                .iter()
                .filter(|(id, _)| id.eq_ignore_ascii_case(&language_id));
            for (_, language_override) in matching {
                adapter = adapter.with_override(language_override);
            }
            registry.register(adapter);
        }
        tracing::debug!(languages = registry.adapters.len(), "built language registry");
        Ok(registry)
    }

    /// Register an adapter
    pub fn register(&mut self, adapter: impl LanguageAdapter + 'static) {
        self.adapters.push(Box::new(adapter));
    }

    /// Find the adapter for a language id or display name (case-insensitive).
    pub fn resolve(&self, language: &str) -> Result<&dyn LanguageAdapter> {
        self.adapters
            .iter()
            .find(|a| {
                a.language_id().eq_ignore_ascii_case(language)
                    || a.language_name().eq_ignore_ascii_case(language)
            })
            .map(|a| a.as_ref())
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))
    }

    /// Find an adapter for a file
    pub fn find_by_path(&self, path: &Path) -> Option<&dyn LanguageAdapter> {
        self.adapters
            .iter()
            .find(|a| a.can_handle(path))
            .map(|a| a.as_ref())
    }

    /// Ids of every registered language, in registration order.
    pub fn languages(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.language_id()).collect()
    }

    /// Get all registered adapters
    pub fn adapters(&self) -> &[Box<dyn LanguageAdapter>] {
        &self.adapters
    }
}

/// Create a default registry with all built-in adapters
pub fn default_registry() -> Result<LanguageRegistry> {
    LanguageRegistry::builtin()
}
