//! Narrative generation for credrisk.
//!
//! Produces the free-form preliminary risk commentary appended to the report.
//! The text is opaque to the rest of the pipeline.

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;

pub use client::ChatCompletionsGenerator;
pub use error::NarrativeError;
pub use generator::{NarrativeGenerator, NarrativeText, StaticNarrative};
pub use prompt::{SYSTEM_MESSAGE, build_prompt};
