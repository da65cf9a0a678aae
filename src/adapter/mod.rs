//! Language Adapter Framework
//!
//! Each language provides a tree-sitter grammar and a TOML table that maps
//! node kinds to classifications and categories. The navigation engine never
//! sees language-specific logic.

pub mod framework;
pub mod grammar;
pub mod table;

pub use framework::{LanguageAdapter, LanguageRegistry, ParsedSource, default_registry};
pub use grammar::GrammarAdapter;
pub use table::{CategoryKinds, LanguageTable};
