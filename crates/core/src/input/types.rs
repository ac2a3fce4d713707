//! Credit application data types.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::error::InputError;

/// Company identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Company {
    /// Legal name.
    pub name: String,
    /// Brazilian company tax id.
    pub cnpj: String,
    /// Business sector.
    pub sector: String,
    /// Region of operation.
    pub region: String,
}

/// Simplified income statement and balance sheet.
///
/// Every amount is non-negative except `equity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_finite_amounts"))]
pub struct FinancialStatement {
    /// Reference period length in months.
    #[validate(range(min = 1, max = 12))]
    pub period_months: u32,
    /// Revenue over the period.
    #[validate(range(min = 0.0))]
    pub revenue: f64,
    /// Cost of goods sold.
    #[validate(range(min = 0.0))]
    pub cogs: f64,
    /// Operating expenses.
    #[validate(range(min = 0.0))]
    pub operating_expenses: f64,
    /// Current assets.
    #[validate(range(min = 0.0))]
    pub assets_current: f64,
    /// Total assets.
    #[validate(range(min = 0.0))]
    pub assets_total: f64,
    /// Current liabilities.
    #[validate(range(min = 0.0))]
    pub liabilities_current: f64,
    /// Total liabilities.
    #[validate(range(min = 0.0))]
    pub liabilities_total: f64,
    /// Shareholders' equity. May be negative.
    pub equity: f64,
}

impl FinancialStatement {
    /// Monetary fields in display order, paired with their field names.
    #[must_use]
    pub const fn amounts(&self) -> [(&'static str, f64); 8] {
        [
            ("revenue", self.revenue),
            ("cogs", self.cogs),
            ("operating_expenses", self.operating_expenses),
            ("assets_current", self.assets_current),
            ("liabilities_current", self.liabilities_current),
            ("assets_total", self.assets_total),
            ("liabilities_total", self.liabilities_total),
            ("equity", self.equity),
        ]
    }
}

fn validate_finite_amounts(statement: &FinancialStatement) -> Result<(), ValidationError> {
    if statement.amounts().iter().all(|(_, v)| v.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_amount"))
    }
}

/// Receivable instrument kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableType {
    /// Electronic trade bill (duplicata escritural).
    DuplicataEscritural,
}

impl ReceivableType {
    /// Wire name of the instrument.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicataEscritural => "duplicata_escritural",
        }
    }
}

impl std::fmt::Display for ReceivableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receivable offered as collateral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Receivable {
    /// Instrument kind.
    #[serde(rename = "type")]
    pub kind: ReceivableType,
    /// Face amount.
    #[validate(range(min = 0.0))]
    pub amount: f64,
    /// Days until due.
    #[validate(range(max = 365))]
    pub due_days: u32,
}

/// Payment history category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentHistory {
    /// Pays on time.
    Regular,
    /// Late or missed payments.
    Irregular,
    /// No history available.
    #[default]
    Unknown,
}

impl PaymentHistory {
    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Irregular => "irregular",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PaymentHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral signals. Every field is optional on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Behavioral {
    /// Payment history category.
    #[serde(default)]
    pub payment_history: PaymentHistory,
    /// Delinquency events in the trailing twelve months.
    #[serde(default)]
    #[validate(range(max = 100))]
    pub delinquency_events_last_12m: u32,
}

/// Full credit application payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreditApplication {
    /// Applicant identity.
    #[validate(nested)]
    pub company: Company,
    /// Financial statement.
    #[validate(nested)]
    pub financials: FinancialStatement,
    /// Receivable terms.
    #[validate(nested)]
    pub receivable: Receivable,
    /// Behavioral signals.
    #[serde(default)]
    #[validate(nested)]
    pub behavioral: Behavioral,
}

impl CreditApplication {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Parse`] for malformed JSON or unknown enum values and
    /// [`InputError::Invalid`] when a field is out of range.
    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        let application: Self = serde_json::from_str(raw)?;
        application.validate()?;
        Ok(application)
    }

    /// Validates an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`CreditApplication::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputError> {
        let application: Self = serde_json::from_value(value)?;
        application.validate()?;
        Ok(application)
    }
}
