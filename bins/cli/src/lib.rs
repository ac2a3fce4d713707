//! Credit-risk report pipeline.
//!
//! Reads a credit application, computes ratios, asks the narrative service for
//! a preliminary assessment and writes the report plus an audit context.

pub mod cli;
pub mod pipeline;
pub mod settings;

pub use cli::Args;
pub use pipeline::{PipelineOutput, run, run_at};
