//! Shared configuration and errors for credrisk.
//!
//! This crate provides the pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, NarrativeSettings, OutputConfig};
pub use error::{AppError, AppResult};
