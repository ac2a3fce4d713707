//! Credit-application input schema.
//!
//! Deserializes the JSON payload and enforces the field ranges the rest of
//! the pipeline relies on. Nothing downstream re-validates.

pub mod error;
pub mod types;


pub use error::InputError;
pub use types::{
    Behavioral, Company, CreditApplication, FinancialStatement, PaymentHistory, Receivable,
    ReceivableType,
};
