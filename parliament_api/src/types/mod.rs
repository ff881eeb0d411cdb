//! Typed read models for the backend's JSON resources.
//!
//! Every type implements [`Validate`]: serde checks the shape, `validate`
//! checks the invariants serde cannot express. The client runs both before
//! handing a value to callers.

mod de;

mod meta;
pub use self::meta::Page;

mod bill;
pub use self::bill::{Bill, BillID, BillReading, BillStatus, Engagement, ReadingStage};

mod mp;
pub use self::mp::{Mp, MpID};

mod news;
pub use self::news::{HotItem, NewsArticle};

mod committee;
pub use self::committee::{Committee, CommitteeID, Document};

mod loan;
pub use self::loan::{Loan, LoanID};

mod chat;
pub use self::chat::{ChatReply, ChatRequest};

mod contact;
pub use self::contact::{ContactMessage, ContactReceipt};

/// Boundary check run on every decoded response.
pub trait Validate {
    /// Returns a short description of the first violated invariant.
    fn validate(&self) -> Result<(), String>;
}

impl Validate for serde_json::Value {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        for (idx, item) in self.iter().enumerate() {
            item.validate().map_err(|e| format!("[{}]: {}", idx, e))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), String> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is empty", field))
    } else {
        Ok(())
    }
}

pub(crate) fn require_id(field: &str, id: u64) -> Result<(), String> {
    if id == 0 {
        Err(format!("{} must be positive", field))
    } else {
        Ok(())
    }
}
