//! Analysis context shared with the narrative generator.

use serde::Serialize;

use crate::input::{Behavioral, Company, CreditApplication, FinancialStatement, Receivable};
use crate::ratios::{RatioSet, compute_ratios};

/// Validated input plus computed ratios.
///
/// Serialized into the narrative prompt and persisted next to the report for
/// audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisContext {
    /// Applicant identity.
    pub company: Company,
    /// Financial statement.
    pub financials: FinancialStatement,
    /// Receivable terms.
    pub receivable: Receivable,
    /// Behavioral signals.
    pub behavioral: Behavioral,
    /// Computed ratios.
    pub ratios: RatioSet,
}

impl AnalysisContext {
    /// Computes ratios for an application and bundles them with its data.
    #[must_use]
    pub fn from_application(application: &CreditApplication) -> Self {
        Self {
            company: application.company.clone(),
            financials: application.financials,
            receivable: application.receivable,
            behavioral: application.behavioral,
            ratios: compute_ratios(&application.financials),
        }
    }

    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
