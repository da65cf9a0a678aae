//! # Treejump - Structural Syntax-Tree Navigation
//!
//! Moves a caret between meaningful elements of a parsed source file instead
//! of lines or words.
//!
//! Treejump provides:
//! - A uniform read-only view over any parser's nodes ([`syntax`])
//! - Table-driven significant/trivial classification ([`classify`])
//! - Sibling, parent, child, expand/shrink and category motions ([`motion`])
//! - Caret and selection translation ([`position`])
//! - Tree-sitter backed language adapters and their registry ([`adapter`])

pub mod syntax;
pub mod classify;
pub mod position;
pub mod motion;
pub mod adapter;
pub mod navigator;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use syntax::{SyntaxNode, TextRange};
pub use classify::{Classification, ClassifierTable, NodeCategory};
pub use motion::{Direction, Motion};
pub use adapter::{LanguageAdapter, LanguageRegistry};
pub use navigator::{NavigationRequest, NavigationResult, Navigator};

/// Result type alias for Treejump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Treejump operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown motion: {0}")]
    UnknownMotion(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Adapter error: {0}")]
    Adapter(String),

    #[error("Invalid language table: {0}")]
    Table(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Offset {offset} is out of range for a {len}-byte source")]
    OffsetOutOfRange { offset: usize, len: usize },
}
