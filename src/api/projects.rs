//! Project listing with category and featured filters.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Project, ProjectCategory};
use crate::AppState;

/// Query parameters for listing projects.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    /// Category name, or "all" for no filter.
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    fn category(&self) -> Result<Option<ProjectCategory>, AppError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(name) => ProjectCategory::parse(name)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown project category: {}", name))),
        }
    }
}

/// GET /api/projects - List projects, optionally filtered.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> ApiResult<Vec<Project>> {
    let revision_id = state.store.revision_id().await;

    let category = match filter.category() {
        Ok(category) => category,
        Err(e) => return error(e, revision_id),
    };

    let projects = state
        .store
        .list::<Project>()
        .await
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
        .collect();

    success(projects, revision_id)
}
