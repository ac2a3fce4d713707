//! Report assembly.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::context::ReportContext;
use super::error::ReportError;
use super::sections::{ReportDocument, Section};
use crate::ratios::RatioSet;

/// Renders the full report stamped with the current UTC time.
///
/// Identification fields are interpolated verbatim, blank values included.
/// Absent required fields are reported earlier, by
/// [`ReportContext::from_payload`].
///
/// # Errors
///
/// Returns a [`ReportError`] when the document cannot be assembled. A context
/// that was successfully constructed always renders.
pub fn render_report(
    context: &ReportContext,
    ratios: &RatioSet,
    narrative: &str,
) -> Result<String, ReportError> {
    render_report_at(context, ratios, narrative, Utc::now())
}

/// Renders the full report with an explicit generation timestamp.
///
/// Either the whole document is returned or nothing is.
///
/// # Errors
///
/// See [`render_report`].
pub fn render_report_at(
    context: &ReportContext,
    ratios: &RatioSet,
    narrative: &str,
    generated_at: DateTime<Utc>,
) -> Result<String, ReportError> {
    let doc = ReportDocument {
        context,
        ratios,
        narrative,
        generated_at,
    };

    let lines: Vec<String> = Section::ALL
        .into_iter()
        .flat_map(|section| section.render(&doc))
        .collect();

    debug!(
        company = %context.company.name,
        lines = lines.len(),
        "Rendered report"
    );

    Ok(lines.join("\n"))
}
