//! Per-language tables
//!
//! Each built-in language ships a TOML table under `languages/` describing
//! which node kinds are trivial and which kinds belong to each category.

use crate::classify::{ClassifierTable, NodeCategory};
use crate::config::LanguageOverride;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageTable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub anonymous_trivial: bool,
    #[serde(default)]
    pub punctuation_trivial: bool,
    #[serde(default)]
    pub trivial: Vec<String>,
    #[serde(default)]
    pub significant: Vec<String>,
    #[serde(default)]
    pub categories: CategoryKinds,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryKinds {
    #[serde(default)]
    pub function: Vec<String>,
    #[serde(default)]
    pub class: Vec<String>,
    #[serde(default)]
    pub statement: Vec<String>,
    #[serde(default, rename = "loop")]
    pub loops: Vec<String>,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub argument: Vec<String>,
    #[serde(default)]
    pub variable: Vec<String>,
    #[serde(default, rename = "type")]
    pub types: Vec<String>,
    #[serde(default)]
    pub operator: Vec<String>,
    #[serde(default)]
    pub expression: Vec<String>,
    #[serde(default, rename = "macro")]
    pub macros: Vec<String>,
    /// List kinds whose significant children are arguments.
    #[serde(default)]
    pub argument_lists: Vec<String>,
}

impl CategoryKinds {
    pub fn kinds(&self, category: NodeCategory) -> &[String] {
        match category {
            NodeCategory::Function => &self.function,
            NodeCategory::Class => &self.class,
            NodeCategory::Statement => &self.statement,
            NodeCategory::Loop => &self.loops,
            NodeCategory::Comment => &self.comment,
            NodeCategory::Argument => &self.argument,
            NodeCategory::Variable => &self.variable,
            NodeCategory::Type => &self.types,
            NodeCategory::Operator => &self.operator,
            NodeCategory::Expression => &self.expression,
            NodeCategory::Macro => &self.macros,
        }
    }
}

impl LanguageTable {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Merge user adjustments. Overridden kinds move between the trivial and
    /// significant lists; extensions are appended.
    pub fn apply(&mut self, overrides: &LanguageOverride) {
        for kind in &overrides.trivial {
            self.significant.retain(|k| k != kind);
            push_unique(&mut self.trivial, kind);
        }
        for kind in &overrides.significant {
            self.trivial.retain(|k| k != kind);
            push_unique(&mut self.significant, kind);
        }
        for ext in &overrides.extensions {
            push_unique(&mut self.extensions, ext.trim_start_matches('.'));
        }
    }

    pub fn classifier(&self) -> ClassifierTable {
        let mut table = ClassifierTable::new()
            .anonymous_trivial(self.anonymous_trivial)
            .punctuation_trivial(self.punctuation_trivial)
            .trivial(self.trivial.iter().cloned())
            .significant(self.significant.iter().cloned())
            .with_category_container(
                NodeCategory::Argument,
                self.categories.argument_lists.iter().cloned(),
            );
        for category in NodeCategory::all() {
            let kinds = self.categories.kinds(*category).iter().cloned();
            table = table.with_category(*category, kinds);
        }
        table
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;

    const TABLE: &str = r#"
id = "demo"
name = "Demo"
extensions = ["demo"]
anonymous_trivial = true
trivial = ["comment"]
significant = [";"]

[categories]
function = ["function"]
loop = ["for", "while"]
type = ["type_name"]
macro = ["macro_call"]
argument_lists = ["arguments"]
"#;

    #[test]
    fn test_parse_table() {
        let table = LanguageTable::from_toml(TABLE).unwrap();
        assert_eq!(table.id, "demo");
        assert!(table.anonymous_trivial);
        assert!(!table.punctuation_trivial);
        assert_eq!(table.categories.kinds(NodeCategory::Loop), ["for", "while"]);
        assert!(table.categories.class.is_empty());
        assert_eq!(table.categories.kinds(NodeCategory::Type), ["type_name"]);
        assert_eq!(table.categories.kinds(NodeCategory::Macro), ["macro_call"]);
        assert!(table.categories.kinds(NodeCategory::Operator).is_empty());
    }

    #[test]
    fn test_classifier_from_table() {
        let classifier = LanguageTable::from_toml(TABLE).unwrap().classifier();
        assert_eq!(classifier.classify_kind("comment", true), Classification::Trivial);
        assert_eq!(classifier.classify_kind(";", false), Classification::Significant);
        assert_eq!(classifier.classify_kind("{", false), Classification::Trivial);
        assert_eq!(classifier.category_kinds(NodeCategory::Function), vec!["function"]);
    }

    #[test]
    fn test_apply_overrides() {
        let mut table = LanguageTable::from_toml(TABLE).unwrap();
        table.apply(&LanguageOverride {
            trivial: vec![";".to_string()],
            significant: vec!["comment".to_string()],
            extensions: vec![".dm".to_string(), "demo".to_string()],
        });

        assert_eq!(table.trivial, vec![";"]);
        assert_eq!(table.significant, vec!["comment"]);
        assert_eq!(table.extensions, vec!["demo", "dm"]);

        let classifier = table.classifier();
        assert_eq!(classifier.classify_kind("comment", true), Classification::Significant);
        assert_eq!(classifier.classify_kind(";", false), Classification::Trivial);
    }

    #[test]
    fn test_invalid_table() {
        assert!(matches!(
            LanguageTable::from_toml("id = 3"),
            Err(crate::Error::Table(_))
        ));
    }
}
