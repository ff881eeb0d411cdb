//! Contact form submission.

use serde::{Deserialize, Serialize};

use super::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Confirmation returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContactReceipt {
    pub message: String,
}

impl Validate for ContactReceipt {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
