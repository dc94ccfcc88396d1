//! Contact form messages.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// A message left through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

/// Request body for the contact form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Inbox changes an admin can make to a message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub read: Option<bool>,
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(
            &[
                self.name.as_str(),
                self.email.as_str(),
                self.subject.as_str(),
                self.message.as_str(),
            ],
            "Name, email, subject and message are required",
        )
    }
}

impl Validate for UpdateContactRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Record for ContactMessage {
    type Draft = ContactRequest;
    type Patch = UpdateContactRequest;

    const KIND: &'static str = "Message";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.subject.clone()
    }

    fn from_draft(id: String, draft: ContactRequest, now: &str) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            subject: draft.subject,
            message: draft.message,
            read: false,
            created_at: now.to_string(),
        }
    }

    fn merge(&mut self, patch: UpdateContactRequest, _now: &str) {
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}
