//! Government loans approved by Parliament.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::deserialize_amount;
use super::{require_id, require_non_empty, Document, Validate};

pub type LoanID = u64;

/// An approved loan with its supporting documents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Loan {
    pub id: LoanID,

    pub sector: String,

    /// Lending institution or country.
    pub lender: String,

    /// ISO 4217 code, e.g. "USD".
    pub currency: String,

    /// The backend serialises decimals as strings; numbers are accepted too.
    #[serde(deserialize_with = "deserialize_amount")]
    pub approved_amount: f64,

    pub approval_date: NaiveDate,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Validate for Loan {
    fn validate(&self) -> Result<(), String> {
        require_id("loan id", self.id)?;
        require_non_empty("loan currency", &self.currency)?;
        if self.approved_amount < 0.0 {
            return Err(format!("negative approved amount {}", self.approved_amount));
        }
        self.documents
            .validate()
            .map_err(|e| format!("documents{}", e))
    }
}
