//! Education model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// A degree or school attended. Ongoing studies carry no end year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl Education {
    fn normalize(&mut self) {
        if self.current {
            self.end_year = None;
        }
    }
}

/// Request body for creating a new education entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

/// Request body for updating an existing education entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducationRequest {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

const REQUIRED: &str = "Degree and institution are required";

impl Validate for CreateEducationRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.degree.as_str(), self.institution.as_str()], REQUIRED)
    }
}

impl Validate for UpdateEducationRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(
            &[self.degree.as_deref(), self.institution.as_deref()],
            REQUIRED,
        )
    }
}

impl Record for Education {
    type Draft = CreateEducationRequest;
    type Patch = UpdateEducationRequest;

    const KIND: &'static str = "Education";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.degree.clone()
    }

    fn from_draft(id: String, draft: CreateEducationRequest, _now: &str) -> Self {
        let mut education = Self {
            id,
            degree: draft.degree,
            institution: draft.institution,
            location: draft.location,
            start_year: draft.start_year,
            end_year: form::non_blank(draft.end_year),
            current: draft.current,
            description: form::non_blank(draft.description),
            grade: form::non_blank(draft.grade),
        };
        education.normalize();
        education
    }

    fn merge(&mut self, patch: UpdateEducationRequest, _now: &str) {
        if let Some(degree) = patch.degree {
            self.degree = degree;
        }
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(start_year) = patch.start_year {
            self.start_year = start_year;
        }
        if let Some(end_year) = patch.end_year {
            self.end_year = form::non_blank(Some(end_year));
        }
        if let Some(current) = patch.current {
            self.current = current;
        }
        if let Some(description) = patch.description {
            self.description = form::non_blank(Some(description));
        }
        if let Some(grade) = patch.grade {
            self.grade = form::non_blank(Some(grade));
        }
        self.normalize();
    }
}
