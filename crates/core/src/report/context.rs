//! Read-only input to the renderer.

use serde_json::Value;

use super::error::ReportError;
use crate::input::{Company, CreditApplication, FinancialStatement, PaymentHistory};

/// Receivable terms as displayed in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivableTerms {
    /// Instrument kind, interpolated verbatim.
    pub kind: String,
    /// Face amount.
    pub amount: f64,
    /// Days until due.
    pub due_days: u32,
}

/// Behavioral signals; absent values fall back to defaults at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehavioralSignals {
    /// Payment history category.
    pub payment_history: Option<String>,
    /// Delinquency events in the trailing window.
    pub delinquency_events: Option<u32>,
}

impl BehavioralSignals {
    /// Payment history, or `"unknown"` when absent.
    #[must_use]
    pub fn payment_history_or_default(&self) -> &str {
        self.payment_history
            .as_deref()
            .unwrap_or(PaymentHistory::Unknown.as_str())
    }

    /// Delinquency event count, or zero when absent.
    #[must_use]
    pub fn delinquency_events_or_default(&self) -> u32 {
        self.delinquency_events.unwrap_or_default()
    }
}

/// Everything the renderer reads besides the ratios and the narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Company identity.
    pub company: Company,
    /// Financial statement.
    pub financials: FinancialStatement,
    /// Receivable terms.
    pub receivable: ReceivableTerms,
    /// Behavioral signals.
    pub behavioral: BehavioralSignals,
}

impl From<&CreditApplication> for ReportContext {
    fn from(application: &CreditApplication) -> Self {
        Self {
            company: application.company.clone(),
            financials: application.financials,
            receivable: ReceivableTerms {
                kind: application.receivable.kind.to_string(),
                amount: application.receivable.amount,
                due_days: application.receivable.due_days,
            },
            behavioral: BehavioralSignals {
                payment_history: Some(application.behavioral.payment_history.to_string()),
                delinquency_events: Some(application.behavioral.delinquency_events_last_12m),
            },
        }
    }
}

impl ReportContext {
    /// Builds a context from a raw JSON payload without schema validation.
    ///
    /// Identification, financial and receivable fields are required; the
    /// `behavioral` object and each of its fields are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedInput`] naming the first absent or
    /// mistyped required field.
    pub fn from_payload(payload: &Value) -> Result<Self, ReportError> {
        let company = Fields::new(payload, "company")?;
        let fin = Fields::new(payload, "financials")?;
        let rec = Fields::new(payload, "receivable")?;

        let behavioral = payload
            .get("behavioral")
            .map(|b| BehavioralSignals {
                payment_history: b
                    .get("payment_history")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                delinquency_events: b
                    .get("delinquency_events_last_12m")
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok()),
            })
            .unwrap_or_default();

        Ok(Self {
            company: Company {
                name: company.string("name")?,
                cnpj: company.string("cnpj")?,
                sector: company.string("sector")?,
                region: company.string("region")?,
            },
            financials: FinancialStatement {
                period_months: fin.count("period_months")?,
                revenue: fin.number("revenue")?,
                cogs: fin.number("cogs")?,
                operating_expenses: fin.number("operating_expenses")?,
                assets_current: fin.number("assets_current")?,
                assets_total: fin.number("assets_total")?,
                liabilities_current: fin.number("liabilities_current")?,
                liabilities_total: fin.number("liabilities_total")?,
                equity: fin.number("equity")?,
            },
            receivable: ReceivableTerms {
                kind: rec.string("type")?,
                amount: rec.number("amount")?,
                due_days: rec.count("due_days")?,
            },
            behavioral,
        })
    }
}

/// Typed accessor over one object of the payload.
struct Fields<'a> {
    section: &'static str,
    object: &'a Value,
}

impl<'a> Fields<'a> {
    fn new(payload: &'a Value, section: &'static str) -> Result<Self, ReportError> {
        payload
            .get(section)
            .filter(|v| v.is_object())
            .map(|object| Self { section, object })
            .ok_or_else(|| ReportError::MalformedInput(section.to_string()))
    }

    fn missing(&self, key: &str) -> ReportError {
        ReportError::MalformedInput(format!("{}.{key}", self.section))
    }

    fn string(&self, key: &str) -> Result<String, ReportError> {
        self.object
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.missing(key))
    }

    fn number(&self, key: &str) -> Result<f64, ReportError> {
        self.object
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.missing(key))
    }

    fn count(&self, key: &str) -> Result<u32, ReportError> {
        self.object
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.missing(key))
    }
}
