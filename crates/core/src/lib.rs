//! Core business logic for credrisk.
//!
//! This crate contains pure business logic with ZERO network or filesystem dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `input` - Credit application schema and validation
//! - `ratios` - Financial ratio engine with safe division
//! - `report` - Markdown report rendering and display formatting
//! - `analysis` - Context handed to the narrative generator

pub mod analysis;
pub mod input;
pub mod ratios;
pub mod report;

pub use analysis::AnalysisContext;
