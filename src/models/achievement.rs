//! Achievement model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// An award, milestone or other notable accomplishment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new achievement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievementRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub proof_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Request body for updating an existing achievement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievementRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub proof_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

const REQUIRED: &str = "Title and description are required";

impl Validate for CreateAchievementRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.title.as_str(), self.description.as_str()], REQUIRED)
    }
}

impl Validate for UpdateAchievementRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(
            &[self.title.as_deref(), self.description.as_deref()],
            REQUIRED,
        )
    }
}

impl Record for Achievement {
    type Draft = CreateAchievementRequest;
    type Patch = UpdateAchievementRequest;

    const KIND: &'static str = "Achievement";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn from_draft(id: String, draft: CreateAchievementRequest, now: &str) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            proof_url: form::non_blank(draft.proof_url),
            date: form::non_blank(draft.date).unwrap_or_else(|| now.to_string()),
            icon: form::non_blank(draft.icon),
            created_at: now.to_string(),
        }
    }

    fn merge(&mut self, patch: UpdateAchievementRequest, _now: &str) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(proof_url) = patch.proof_url {
            self.proof_url = form::non_blank(Some(proof_url));
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(icon) = patch.icon {
            self.icon = form::non_blank(Some(icon));
        }
    }
}
