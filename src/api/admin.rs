//! Admin session endpoints plus the admin-only dashboard and reset.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{error, success, success_with, ApiResult};
use crate::errors::AppError;
use crate::models::{Dashboard, SessionStatus};
use crate::notice::Notice;
use crate::AppState;

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// POST /api/admin/login - Enter admin mode.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;

    if state.session.login(&request.password) {
        success_with(
            SessionStatus { is_admin: true },
            revision_id,
            Notice::info("Welcome back, Admin!", "You now have access to edit content."),
        )
    } else {
        error(
            AppError::InvalidCredentials("Invalid password".to_string()),
            revision_id,
        )
    }
}

/// POST /api/admin/logout - Leave admin mode.
pub async fn logout(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;
    state.session.logout();

    success_with(
        SessionStatus { is_admin: false },
        revision_id,
        Notice::info("Logged out", "Admin mode is off."),
    )
}

/// GET /api/admin/session - Whether admin mode is on.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;
    success(
        SessionStatus {
            is_admin: state.session.is_admin(),
        },
        revision_id,
    )
}

/// GET /api/admin/dashboard - Collection counts and previews.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let revision_id = state.store.revision_id().await;
    success(state.store.dashboard().await, revision_id)
}

/// POST /api/admin/reset - Throw away every edit and reload the seed data.
pub async fn reset_portfolio(State(state): State<AppState>) -> ApiResult<()> {
    let revision_id = state.store.reset().await;

    success_with(
        (),
        revision_id,
        Notice::destructive("Content Reset", "All content is back to its original state."),
    )
}
