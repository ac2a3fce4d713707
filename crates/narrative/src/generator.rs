//! Narrative generator seam.

use async_trait::async_trait;

use credrisk_core::AnalysisContext;

use crate::error::NarrativeError;

/// Opaque, pre-formatted narrative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeText(String);

impl NarrativeText {
    /// Wraps a generated text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrows the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NarrativeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces a narrative for an analysis context.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generates the preliminary risk narrative. Called once per run, never retried.
    async fn generate(&self, context: &AnalysisContext) -> Result<NarrativeText, NarrativeError>;
}

/// Generator returning a fixed text. Used for offline runs.
#[derive(Debug, Clone)]
pub struct StaticNarrative {
    text: String,
}

impl StaticNarrative {
    /// Creates a generator that always returns `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Placeholder used when the external service is skipped.
    #[must_use]
    pub fn offline() -> Self {
        Self::new(
            "_Interpretação por IA não solicitada nesta execução (modo offline). \
             Avalie os indicadores acima manualmente._",
        )
    }
}

#[async_trait]
impl NarrativeGenerator for StaticNarrative {
    async fn generate(&self, _context: &AnalysisContext) -> Result<NarrativeText, NarrativeError> {
        Ok(NarrativeText::new(self.text.clone()))
    }
}
