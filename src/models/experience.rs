//! Work experience model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// A position held at a company.
///
/// A current position has no end date; saving with `current` set drops
/// whatever end date was there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub created_at: String,
}

impl Experience {
    fn normalize(&mut self) {
        if self.current {
            self.end_date = None;
        }
    }
}

/// Request body for creating a new experience entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "form::comma_list")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Request body for updating an existing experience entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "form::opt_comma_list")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub logo: Option<String>,
}

const REQUIRED: &str = "Company and role are required";

impl Validate for CreateExperienceRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.company.as_str(), self.role.as_str()], REQUIRED)
    }
}

impl Validate for UpdateExperienceRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(&[self.company.as_deref(), self.role.as_deref()], REQUIRED)
    }
}

impl Record for Experience {
    type Draft = CreateExperienceRequest;
    type Patch = UpdateExperienceRequest;

    const KIND: &'static str = "Experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }

    fn from_draft(id: String, draft: CreateExperienceRequest, now: &str) -> Self {
        let mut experience = Self {
            id,
            company: draft.company,
            role: draft.role,
            start_date: draft.start_date,
            end_date: form::non_blank(draft.end_date),
            current: draft.current,
            description: draft.description,
            tech_stack: draft.tech_stack,
            logo: form::non_blank(draft.logo),
            created_at: now.to_string(),
        };
        experience.normalize();
        experience
    }

    fn merge(&mut self, patch: UpdateExperienceRequest, _now: &str) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = form::non_blank(Some(end_date));
        }
        if let Some(current) = patch.current {
            self.current = current;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(tech_stack) = patch.tech_stack {
            self.tech_stack = tech_stack;
        }
        if let Some(logo) = patch.logo {
            self.logo = form::non_blank(Some(logo));
        }
        self.normalize();
    }
}
