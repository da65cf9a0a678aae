//! Navigation requests
//!
//! Glue between a host and the engine: resolve the language, find the current
//! node, run the motion, translate the target back into a caret and
//! selection.

use crate::adapter::LanguageRegistry;
use crate::classify::ClassifierTable;
use crate::motion::{Motion, locate};
use crate::position::{to_caret, to_selection};
use crate::syntax::{SyntaxNode, TextRange};
use crate::{Error, Result};
use serde::Serialize;

/// One cursor move requested by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub language: String,
    pub caret: usize,
    /// Current selection, if the host has one.
    pub selection: Option<TextRange>,
    pub motion: Motion,
    /// Report the target's full range as the new selection.
    pub select: bool,
}

impl NavigationRequest {
    pub fn new(language: impl Into<String>, caret: usize, motion: Motion) -> Self {
        Self {
            language: language.into(),
            caret,
            selection: None,
            motion,
            select: false,
        }
    }

    /// Set the current selection; reversed bounds are normalised.
    pub fn with_selection(mut self, from: usize, to: usize) -> Self {
        self.selection = Some(TextRange::new(from.min(to), from.max(to)));
        self
    }

    pub fn select(mut self, select: bool) -> Self {
        self.select = select;
        self
    }

    /// The range the current node is derived from: the selection when it is
    /// non-empty, otherwise the caret.
    pub fn current(&self) -> TextRange {
        match self.selection {
            Some(selection) if !selection.is_empty() => selection,
            _ => TextRange::caret(self.caret),
        }
    }
}

/// Outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum NavigationResult {
    Moved {
        caret: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        selection: Option<TextRange>,
        kind: String,
    },
    NoMovement,
}

impl NavigationResult {
    pub fn caret(&self) -> Option<usize> {
        match self {
            NavigationResult::Moved { caret, .. } => Some(*caret),
            NavigationResult::NoMovement => None,
        }
    }

    pub fn selection(&self) -> Option<TextRange> {
        match self {
            NavigationResult::Moved { selection, .. } => *selection,
            NavigationResult::NoMovement => None,
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, NavigationResult::Moved { .. })
    }
}

/// Runs requests against a borrowed registry.
pub struct Navigator<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> Navigator<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r LanguageRegistry {
        self.registry
    }

    /// Navigate over a tree the host already holds.
    pub fn navigate<N: SyntaxNode>(
        &self,
        root: &N,
        request: &NavigationRequest,
    ) -> Result<NavigationResult> {
        let adapter = self.registry.resolve(&request.language)?;
        tracing::debug!(language = adapter.language_id(), motion = %request.motion, "navigate");
        Ok(navigate_with(root, request, adapter.classifier()))
    }

    /// Parse `source` with the request's language, then navigate.
    ///
    /// Offsets beyond the end of `source` are rejected.
    pub fn navigate_source(
        &self,
        source: &str,
        request: &NavigationRequest,
    ) -> Result<NavigationResult> {
        let current = request.current();
        let furthest = current.end.max(request.caret);
        if furthest > source.len() {
            return Err(Error::OffsetOutOfRange {
                offset: furthest,
                len: source.len(),
            });
        }

        let adapter = self.registry.resolve(&request.language)?;
        let parsed = adapter.parse(source)?;
        tracing::debug!(
            language = adapter.language_id(),
            motion = %request.motion,
            "navigate source"
        );
        Ok(navigate_with(&parsed.root(), request, adapter.classifier()))
    }
}

/// Run `request` over `root` with an explicit classifier table.
pub fn navigate_with<N: SyntaxNode>(
    root: &N,
    request: &NavigationRequest,
    table: &ClassifierTable,
) -> NavigationResult {
    let Some(target) = locate(root, request.current(), request.motion, table) else {
        tracing::debug!(motion = %request.motion, caret = request.caret, "no movement possible");
        return NavigationResult::NoMovement;
    };

    let selection =
        (request.select || request.motion.is_selection()).then(|| to_selection(&target));
    NavigationResult::Moved {
        caret: to_caret(&target),
        selection,
        kind: target.kind().to_string(),
    }
}
