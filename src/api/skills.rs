//! Skill listing and the visibility toggle.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::{error, success, success_with, ApiResult};
use crate::errors::AppError;
use crate::models::{Skill, SkillCategory};
use crate::notice::Notice;
use crate::AppState;

/// Query parameters for listing skills.
#[derive(Debug, Default, Deserialize)]
pub struct SkillFilter {
    pub category: Option<String>,
}

/// GET /api/skills - List skills.
///
/// Hidden skills only show up while the admin session is active.
pub async fn list_skills(
    State(state): State<AppState>,
    Query(filter): Query<SkillFilter>,
) -> ApiResult<Vec<Skill>> {
    let revision_id = state.store.revision_id().await;

    let category = match filter.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(name) => match SkillCategory::parse(name) {
            Some(category) => Some(category),
            None => {
                return error(
                    AppError::BadRequest(format!("Unknown skill category: {}", name)),
                    revision_id,
                )
            }
        },
    };

    let show_hidden = state.session.is_admin();
    let skills = state
        .store
        .list::<Skill>()
        .await
        .into_iter()
        .filter(|s| show_hidden || s.visible)
        .filter(|s| category.map_or(true, |c| s.category == c))
        .collect();

    success(skills, revision_id)
}

/// POST /api/skills/:id/visibility - Show or hide a skill on the public site.
pub async fn toggle_skill_visibility(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Skill> {
    let revision_id = state.store.revision_id().await;

    match state
        .store
        .modify::<Skill, _>(&id, Skill::toggle_visibility)
        .await
    {
        Ok((skill, new_revision)) => {
            let state_word = if skill.visible { "visible" } else { "hidden" };
            let notice = Notice::info(
                "Skill visibility updated",
                format!("\"{}\" is now {}.", skill.name, state_word),
            );
            success_with(skill, new_revision, notice)
        }
        Err(e) => error(e, revision_id),
    }
}
