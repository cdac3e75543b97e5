use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::ApiError;
use crate::handlers::auth_middleware::InboxAccess;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let Json(req) = payload?;
    let new_submission = req.into_new_submission()?;

    let repository = state.contact_repository.clone();
    let stored = tokio::task::spawn_blocking(move || repository.create_submission(new_submission))
        .await
        .map_err(|e| ApiError::Internal(format!("submission task failed: {}", e)))??;

    info!(
        submission_id = %stored.id,
        project_type = %stored.project_type,
        "Stored contact submission"
    );

    Ok((StatusCode::CREATED, Json(ContactResponse::from(stored))))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    _access: InboxAccess,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let repository = state.contact_repository.clone();
    let submissions = tokio::task::spawn_blocking(move || repository.get_all_submissions())
        .await
        .map_err(|e| ApiError::Internal(format!("listing task failed: {}", e)))??;

    info!(count = submissions.len(), "Listed contact submissions");

    Ok(Json(submissions.into_iter().map(ContactResponse::from).collect()))
}
