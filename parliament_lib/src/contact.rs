//! Contact form controller.

use parliament_api::types::ContactMessage;
use parliament_api::Client;

use crate::error::ParliamentError;
use crate::validation::{
    validate_email, validate_field, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_SUBJECT_LENGTH,
};

/// Outcome of the latest submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Backend confirmation text.
    Sent(String),
    /// Validation or backend error, shown above the still-filled form.
    Failed(String),
}

/// Contact form fields plus the status line shown above them.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Checks and cleans the fields into a request body without changing
    /// the form.
    pub fn to_message(&self) -> Result<ContactMessage, ParliamentError> {
        Ok(ContactMessage {
            name: validate_field("name", &self.name, MAX_NAME_LENGTH)?,
            email: validate_email(&self.email)?,
            subject: validate_field("subject", &self.subject, MAX_SUBJECT_LENGTH)?,
            message: validate_field("message", &self.message, MAX_MESSAGE_LENGTH)?,
        })
    }

    /// Validates and submits the form.
    ///
    /// On success every field is reset and the confirmation is kept in
    /// [`FormStatus::Sent`]. On any failure the fields stay as typed and the
    /// error is kept in [`FormStatus::Failed`].
    pub async fn submit(&mut self, client: &Client) -> Result<String, ParliamentError> {
        let message = match self.to_message() {
            Ok(message) => message,
            Err(e) => {
                self.status = FormStatus::Failed(e.to_string());
                return Err(e);
            }
        };

        match client.submit_contact(&message).await {
            Ok(confirmation) => {
                tracing::info!("Contact message from {} accepted", message.email);
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.status = FormStatus::Sent(confirmation.clone());
                Ok(confirmation)
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.status = FormStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }
}
