//! Public contact form and the admin inbox.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success_with, ApiResult};
use crate::editor::form::Validate;
use crate::models::{ContactMessage, ContactRequest};
use crate::notice::Notice;
use crate::AppState;

/// POST /api/contact - Leave a message for the site owner.
///
/// Incomplete forms are rejected before the configured processing delay.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<ContactMessage> {
    let revision_id = state.store.revision_id().await;

    if let Err(e) = request.validate() {
        return error(e, revision_id);
    }

    tokio::time::sleep(state.config.contact_delay).await;

    match state.store.create::<ContactMessage>(request).await {
        Ok((message, new_revision)) => {
            tracing::info!(id = %message.id, "contact message received");
            success_with(
                message,
                new_revision,
                Notice::info(
                    "Message sent!",
                    "Thanks for reaching out. I'll get back to you soon!",
                ),
            )
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/messages/:id/read - Mark an inbox message as read.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContactMessage> {
    let revision_id = state.store.revision_id().await;

    match state
        .store
        .modify::<ContactMessage, _>(&id, |m| m.read = true)
        .await
    {
        Ok((message, new_revision)) => {
            let notice = Notice::info(
                "Message Read",
                format!("\"{}\" has been marked as read.", message.subject),
            );
            success_with(message, new_revision, notice)
        }
        Err(e) => error(e, revision_id),
    }
}
