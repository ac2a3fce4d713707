//! Preliminary risk report rendering.
//!
//! The report is an ordered list of typed sections, each rendered by its own
//! function, joined into a single Markdown document:
//! - Title and generation timestamp
//! - Identification, receivable terms, behavioral signals
//! - Financial summary and ratio table
//! - Narrative block and closing disclaimer

pub mod context;
pub mod error;
pub mod format;
pub mod renderer;
pub mod sections;

#[cfg(test)]
mod tests;

pub use context::{BehavioralSignals, ReceivableTerms, ReportContext};
pub use error::ReportError;
pub use format::{format_currency, format_percent, format_ratio};
pub use renderer::{render_report, render_report_at};
pub use sections::{RatioDisplay, ReportDocument, Section};
