//! Certificate model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// A certification earned from an issuer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new certificate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

/// Request body for updating an existing certificate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

const REQUIRED: &str = "Title and issuer are required";

impl Validate for CreateCertificateRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.title.as_str(), self.issuer.as_str()], REQUIRED)
    }
}

impl Validate for UpdateCertificateRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(&[self.title.as_deref(), self.issuer.as_deref()], REQUIRED)
    }
}

impl Record for Certificate {
    type Draft = CreateCertificateRequest;
    type Patch = UpdateCertificateRequest;

    const KIND: &'static str = "Certificate";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn from_draft(id: String, draft: CreateCertificateRequest, now: &str) -> Self {
        Self {
            id,
            title: draft.title,
            issuer: draft.issuer,
            issue_date: form::non_blank(draft.issue_date).unwrap_or_else(|| now.to_string()),
            image_url: draft.image_url.unwrap_or_default(),
            credential_url: form::non_blank(draft.credential_url),
            created_at: now.to_string(),
        }
    }

    fn merge(&mut self, patch: UpdateCertificateRequest, _now: &str) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(issuer) = patch.issuer {
            self.issuer = issuer;
        }
        if let Some(issue_date) = patch.issue_date {
            self.issue_date = issue_date;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(credential_url) = patch.credential_url {
            self.credential_url = form::non_blank(Some(credential_url));
        }
    }
}
