//! Project model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Fullstack,
    Backend,
    Ai,
    #[default]
    Personal,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Ai => "ai",
            ProjectCategory::Personal => "personal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fullstack" => Some(ProjectCategory::Fullstack),
            "backend" => Some(ProjectCategory::Backend),
            "ai" => Some(ProjectCategory::Ai),
            "personal" => Some(ProjectCategory::Personal),
            _ => None,
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub images: Vec<String>,
    pub category: ProjectCategory,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "form::comma_list")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    pub featured: bool,
}

/// Request body for updating an existing project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "form::opt_comma_list")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    pub featured: Option<bool>,
}

const REQUIRED: &str = "Title and description are required";

impl Validate for CreateProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.title.as_str(), self.description.as_str()], REQUIRED)
    }
}

impl Validate for UpdateProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(
            &[self.title.as_deref(), self.description.as_deref()],
            REQUIRED,
        )
    }
}

impl Record for Project {
    type Draft = CreateProjectRequest;
    type Patch = UpdateProjectRequest;

    const KIND: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn from_draft(id: String, draft: CreateProjectRequest, now: &str) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            long_description: form::non_blank(draft.long_description),
            tech_stack: draft.tech_stack,
            github_url: form::non_blank(draft.github_url),
            live_url: form::non_blank(draft.live_url),
            images: draft.images,
            category: draft.category.unwrap_or_default(),
            featured: draft.featured,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn merge(&mut self, patch: UpdateProjectRequest, now: &str) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(long_description) = patch.long_description {
            self.long_description = form::non_blank(Some(long_description));
        }
        if let Some(tech_stack) = patch.tech_stack {
            self.tech_stack = tech_stack;
        }
        if let Some(github_url) = patch.github_url {
            self.github_url = form::non_blank(Some(github_url));
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = form::non_blank(Some(live_url));
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = now.to_string();
    }
}
