//! Ratio data types.

use serde::{Deserialize, Serialize};

/// Name of a computed ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioName {
    /// Gross profit over revenue.
    GrossMargin,
    /// EBIT over revenue.
    EbitMargin,
    /// Current assets over current liabilities.
    CurrentRatio,
    /// Total liabilities over total assets.
    DebtToAssets,
    /// Total liabilities over equity.
    DebtToEquity,
    /// Operating expenses over revenue.
    OpexRatio,
}

impl RatioName {
    /// All ratio names in canonical order.
    pub const ALL: [Self; 6] = [
        Self::GrossMargin,
        Self::EbitMargin,
        Self::CurrentRatio,
        Self::DebtToAssets,
        Self::DebtToEquity,
        Self::OpexRatio,
    ];

    /// Snake-case key used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GrossMargin => "gross_margin",
            Self::EbitMargin => "ebit_margin",
            Self::CurrentRatio => "current_ratio",
            Self::DebtToAssets => "debt_to_assets",
            Self::DebtToEquity => "debt_to_equity",
            Self::OpexRatio => "opex_ratio",
        }
    }
}

impl std::fmt::Display for RatioName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six ratios derived from a financial statement.
///
/// Serializes as a flat `name -> value` map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Gross profit over revenue.
    pub gross_margin: f64,
    /// EBIT over revenue.
    pub ebit_margin: f64,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
    /// Total liabilities over total assets.
    pub debt_to_assets: f64,
    /// Total liabilities over equity.
    pub debt_to_equity: f64,
    /// Operating expenses over revenue.
    pub opex_ratio: f64,
}

impl RatioSet {
    /// Returns the value of a single ratio.
    #[must_use]
    pub const fn get(&self, name: RatioName) -> f64 {
        match name {
            RatioName::GrossMargin => self.gross_margin,
            RatioName::EbitMargin => self.ebit_margin,
            RatioName::CurrentRatio => self.current_ratio,
            RatioName::DebtToAssets => self.debt_to_assets,
            RatioName::DebtToEquity => self.debt_to_equity,
            RatioName::OpexRatio => self.opex_ratio,
        }
    }

    /// Iterates `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RatioName, f64)> + '_ {
        RatioName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}
