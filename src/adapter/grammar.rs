//! Grammar-backed Language Adapter
//!
//! Couples a tree-sitter grammar with a [`LanguageTable`]. Adding a language
//! means adding a grammar crate and a table under `languages/`; no navigation
//! code changes.

use super::framework::{LanguageAdapter, ParsedSource};
use super::table::LanguageTable;
use crate::classify::ClassifierTable;
use crate::config::LanguageOverride;
use crate::{Error, Result};
use tree_sitter::{Language, Parser};

/// A language adapter driven by a tree-sitter grammar and a kind table
pub struct GrammarAdapter {
    language: Language,
    table: LanguageTable,
    classifier: ClassifierTable,
}

impl GrammarAdapter {
    /// Ids of the built-in languages, in registration order.
    pub const BUILTIN: &'static [&'static str] = &["rust", "go", "python", "javascript", "json"];

    pub fn new(language: Language, table: LanguageTable) -> Self {
        let classifier = table.classifier();
        Self { language, table, classifier }
    }

    /// Create an adapter from a grammar and a TOML table
    pub fn from_toml(language: Language, table_source: &str) -> Result<Self> {
        Ok(Self::new(language, LanguageTable::from_toml(table_source)?))
    }

    /// Create a Rust adapter with the embedded table
    pub fn rust() -> Result<Self> {
        let language = tree_sitter_rust::LANGUAGE.into();
        Self::from_toml(language, include_str!("../../languages/rust.toml"))
    }

    /// Create a Go adapter with the embedded table
    pub fn go() -> Result<Self> {
        let language = tree_sitter_go::LANGUAGE.into();
        Self::from_toml(language, include_str!("../../languages/go.toml"))
    }

    /// Create a Python adapter with the embedded table
    pub fn python() -> Result<Self> {
        let language = tree_sitter_python::LANGUAGE.into();
        Self::from_toml(language, include_str!("../../languages/python.toml"))
    }

    /// Create a JavaScript adapter with the embedded table
    pub fn javascript() -> Result<Self> {
        let language = tree_sitter_javascript::LANGUAGE.into();
        Self::from_toml(language, include_str!("../../languages/javascript.toml"))
    }

    /// Create a JSON adapter with the embedded table
    pub fn json() -> Result<Self> {
        let language = tree_sitter_json::LANGUAGE.into();
        Self::from_toml(language, include_str!("../../languages/json.toml"))
    }

    /// Get all built-in adapters
    pub fn all() -> Vec<Result<Self>> {
        vec![
            Self::rust(),
            Self::go(),
            Self::python(),
            Self::javascript(),
            Self::json(),
        ]
    }

    /// Rebuild the classifier with user adjustments merged in.
    pub fn with_override(mut self, overrides: &LanguageOverride) -> Self {
        if overrides.is_empty() {
            return self;
        }
        tracing::debug!(language = %self.table.id, ?overrides, "applying table overrides");
        self.table.apply(overrides);
        self.classifier = self.table.classifier();
        self
    }

    pub fn table(&self) -> &LanguageTable {
        &self.table
    }
}

impl LanguageAdapter for GrammarAdapter {
    fn language_id(&self) -> &str {
        &self.table.id
    }

    fn language_name(&self) -> &str {
        &self.table.name
    }

    fn file_extensions(&self) -> &[String] {
        &self.table.extensions
    }

    fn classifier(&self) -> &ClassifierTable {
        &self.classifier
    }

    fn parse(&self, source: &str) -> Result<ParsedSource> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::Adapter(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::Parse(format!("{} parser produced no tree", self.table.name)))?;

        let parsed = ParsedSource::new(tree, source.len());
        if parsed.has_errors() {
            tracing::debug!(language = %self.table.id, "parsed with syntax errors");
        }
        Ok(parsed)
    }
}
