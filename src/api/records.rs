//! Collection endpoints shared by every record type.
//!
//! Each handler is generic over the record type and is instantiated once per
//! collection in the router.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{error, success, success_with, ApiResult};
use crate::editor::confirm::DeleteConfirmation;
use crate::editor::Record;
use crate::errors::AppError;
use crate::notice::Notice;
use crate::store::StoredRecord;
use crate::AppState;

/// GET /api/{collection} - List all records in display order.
pub async fn list_records<T: StoredRecord>(State(state): State<AppState>) -> ApiResult<Vec<T>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.list::<T>().await, revision_id)
}

/// GET /api/{collection}/:id - Get a single record.
pub async fn get_record<T: StoredRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<T> {
    let revision_id = state.store.revision_id().await;

    match state.store.get::<T>(&id).await {
        Some(record) => success(record, revision_id),
        None => error(
            AppError::NotFound(format!("{} {} not found", T::KIND, id)),
            revision_id,
        ),
    }
}

/// POST /api/{collection} - Create a record from a form submission.
pub async fn create_record<T: StoredRecord>(
    State(state): State<AppState>,
    Json(draft): Json<T::Draft>,
) -> ApiResult<T> {
    let revision_id = state.store.revision_id().await;

    match state.store.create::<T>(draft).await {
        Ok((record, new_revision)) => {
            let notice = Notice::saved(T::KIND, &record.display_name(), false);
            success_with(record, new_revision, notice)
        }
        Err(e) => {
            tracing::warn!(kind = T::KIND, "create rejected: {}", e);
            error(e, revision_id)
        }
    }
}

/// PUT /api/{collection}/:id - Merge the submitted fields into a record.
pub async fn update_record<T: StoredRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<T::Patch>,
) -> ApiResult<T> {
    let revision_id = state.store.revision_id().await;

    match state.store.update::<T>(&id, patch).await {
        Ok((record, new_revision)) => {
            let notice = Notice::saved(T::KIND, &record.display_name(), true);
            success_with(record, new_revision, notice)
        }
        Err(e) => {
            tracing::warn!(kind = T::KIND, id = %id, "update rejected: {}", e);
            error(e, revision_id)
        }
    }
}

/// DELETE /api/{collection}/:id?confirm=true - Delete a record.
///
/// Without `confirm=true` the record stays and the response names it so the
/// caller can ask the user. Deleting an unknown id succeeds with `null`.
pub async fn delete_record<T: StoredRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> ApiResult<Option<T>> {
    let revision_id = state.store.revision_id().await;

    match state.store.delete::<T>(&id, confirmation.confirm).await {
        Ok((Some(record), new_revision)) => {
            let notice = Notice::deleted(T::KIND, &record.display_name());
            success_with(Some(record), new_revision, notice)
        }
        Ok((None, new_revision)) => success(None, new_revision),
        Err(e) => error(e, revision_id),
    }
}
