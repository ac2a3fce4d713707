//! End-to-end report pipeline.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use credrisk_core::AnalysisContext;
use credrisk_core::input::{CreditApplication, InputError};
use credrisk_core::report::{ReportContext, render_report_at};
use credrisk_narrative::NarrativeGenerator;
use credrisk_shared::{AppError, AppResult};

/// Files written by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Rendered Markdown report.
    pub report_path: PathBuf,
    /// Pretty JSON analysis context.
    pub context_path: PathBuf,
}

/// Runs the pipeline stamped with the current time.
///
/// # Errors
///
/// Fails on unreadable or invalid input, a narrative service error, or a
/// write failure. Nothing is written unless the report rendered completely,
/// and a failed write leaves neither file behind.
pub async fn run(
    input: &Path,
    out_dir: &Path,
    generator: &dyn NarrativeGenerator,
) -> AppResult<PipelineOutput> {
    run_at(input, out_dir, generator, Utc::now()).await
}

/// Runs the pipeline with an explicit timestamp.
///
/// # Errors
///
/// See [`run`].
#[instrument(skip_all, fields(input = %input.display()))]
pub async fn run_at(
    input: &Path,
    out_dir: &Path,
    generator: &dyn NarrativeGenerator,
    now: DateTime<Utc>,
) -> AppResult<PipelineOutput> {
    let raw = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| AppError::Io(format!("{}: {e}", input.display())))?;

    let payload: serde_json::Value = serde_json::from_str(&raw).map_err(InputError::from)?;
    let application = CreditApplication::from_value(payload.clone())?;
    let report_context = ReportContext::from_payload(&payload)?;
    info!(company = %application.company.name, "Input validated");

    let analysis = AnalysisContext::from_application(&application);
    info!(
        gross_margin = analysis.ratios.gross_margin,
        current_ratio = analysis.ratios.current_ratio,
        debt_to_equity = analysis.ratios.debt_to_equity,
        "Ratios computed"
    );

    let narrative = generator.generate(&analysis).await?;

    let report = render_report_at(
        &report_context,
        &analysis.ratios,
        narrative.as_str(),
        now,
    )?;
    let context_json = analysis
        .to_json_pretty()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let stem = input
        .file_stem()
        .map_or_else(|| "input".into(), |s| s.to_string_lossy());
    let ts = now.format("%Y%m%d_%H%M%S");
    let output = PipelineOutput {
        report_path: out_dir.join(format!("{stem}__{ts}_report.md")),
        context_path: out_dir.join(format!("{stem}__{ts}_context.json")),
    };

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| AppError::Io(format!("{}: {e}", out_dir.display())))?;
    write(&output.report_path, &report).await?;
    if let Err(err) = write(&output.context_path, &context_json).await {
        if let Err(cleanup) = tokio::fs::remove_file(&output.report_path).await {
            warn!(error = %cleanup, "Could not remove partial report");
        }
        return Err(err);
    }

    info!(report = %output.report_path.display(), "Report written");
    Ok(output)
}

async fn write(path: &Path, contents: &str) -> AppResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))
}
