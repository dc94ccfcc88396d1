//! Whole-site read endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{About, PortfolioSnapshot, RevisionInfo, SocialLinks};
use crate::AppState;

/// GET /api/portfolio - Everything the public site renders.
pub async fn get_portfolio(State(state): State<AppState>) -> ApiResult<PortfolioSnapshot> {
    let mut snapshot = state.store.snapshot().await;
    if !state.session.is_admin() {
        snapshot.skills.retain(|s| s.visible);
    }

    let revision_id = snapshot.revision_id;
    success(snapshot, revision_id)
}

/// GET /api/portfolio/revision - Current revision for change detection.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let info = state.store.revision_info().await;
    let revision_id = info.revision_id;
    success(info, revision_id)
}

/// GET /api/about - Bio and highlights.
pub async fn get_about(State(state): State<AppState>) -> ApiResult<About> {
    let revision_id = state.store.revision_id().await;
    success(state.store.about().await, revision_id)
}

/// GET /api/social - Social profile links.
pub async fn get_social(State(state): State<AppState>) -> ApiResult<SocialLinks> {
    let revision_id = state.store.revision_id().await;
    success(state.store.social().await, revision_id)
}
