//! Aggregate views over the whole portfolio.

use serde::{Deserialize, Serialize};

use super::{About, Achievement, Certificate, Education, Experience, Project, Skill, SocialLinks};

/// Everything the site renders, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub revision_id: i64,
    pub generated_at: String,
    pub about: About,
    pub social: SocialLinks,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub experiences: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub education: Vec<Education>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Number of records per collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub projects: usize,
    pub certificates: usize,
    pub experiences: usize,
    pub achievements: usize,
    pub education: usize,
    pub skills: usize,
    pub messages: usize,
    pub unread_messages: usize,
}

/// Admin dashboard: counts plus the first few entries of each collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub counts: CollectionCounts,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub experiences: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

/// Whether the admin session is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub is_admin: bool,
}
