//! Financial ratio engine.
//!
//! A minimal, illustrative ratio set for preliminary credit screening:
//! - Margins (gross, EBIT)
//! - Liquidity (current ratio)
//! - Leverage (debt to assets, debt to equity)
//! - Cost structure (opex over revenue)

pub mod engine;
pub mod types;


pub use engine::{SAFE_DIVISION_EPSILON, compute_ratios, safe_div};
pub use types::{RatioName, RatioSet};
