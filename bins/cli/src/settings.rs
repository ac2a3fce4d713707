//! Narrative settings resolution at the binary edge.

use credrisk_shared::NarrativeSettings;

const LEGACY_API_KEY: &str = "GROQ_API_KEY";
const LEGACY_MODEL: &str = "GROQ_MODEL";

/// Fills gaps in the configured settings from the legacy `GROQ_*` variables.
///
/// `GROQ_API_KEY` is used only when no key is configured (a blank key counts
/// as none), and `GROQ_MODEL` only when the model is still the built-in default.
#[must_use]
pub fn with_legacy_env(mut settings: NarrativeSettings) -> NarrativeSettings {
    if settings.api_key.as_deref().is_none_or(|key| key.trim().is_empty()) {
        settings.api_key = std::env::var(LEGACY_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }
    if settings.model == NarrativeSettings::default().model {
        if let Ok(model) = std::env::var(LEGACY_MODEL) {
            settings.model = model;
        }
    }
    settings
}
