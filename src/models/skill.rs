//! Skill model.

use serde::{Deserialize, Serialize};

use crate::editor::form::{self, Validate};
use crate::editor::Record;
use crate::errors::AppError;

/// Closed set of skill categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Database,
    Devops,
    Ai,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Ai,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Ai => "ai",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

pub const MIN_PROFICIENCY: u8 = 1;
pub const MAX_PROFICIENCY: u8 = 100;
pub const DEFAULT_PROFICIENCY: u8 = 80;

fn clamp_proficiency(value: i64) -> u8 {
    value.clamp(MIN_PROFICIENCY as i64, MAX_PROFICIENCY as i64) as u8
}

/// A skill with a self-assessed proficiency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: u8,
    pub visible: bool,
}

impl Skill {
    /// Flip public visibility, leaving everything else as is.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }
}

/// Request body for creating a new skill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub proficiency: Option<i64>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Request body for updating an existing skill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub proficiency: Option<i64>,
    #[serde(default)]
    pub visible: Option<bool>,
}

const REQUIRED: &str = "Skill name is required";

impl Validate for CreateSkillRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require(&[self.name.as_str()], REQUIRED)
    }
}

impl Validate for UpdateSkillRequest {
    fn validate(&self) -> Result<(), AppError> {
        form::require_if_set(&[self.name.as_deref()], REQUIRED)
    }
}

impl Record for Skill {
    type Draft = CreateSkillRequest;
    type Patch = UpdateSkillRequest;

    const KIND: &'static str = "Skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn from_draft(id: String, draft: CreateSkillRequest, _now: &str) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category.unwrap_or_default(),
            proficiency: draft
                .proficiency
                .map(clamp_proficiency)
                .unwrap_or(DEFAULT_PROFICIENCY),
            visible: draft.visible.unwrap_or(true),
        }
    }

    fn merge(&mut self, patch: UpdateSkillRequest, _now: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(proficiency) = patch.proficiency {
            self.proficiency = clamp_proficiency(proficiency);
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
    }
}
