use crate::dtos::{CreateProfileRequest, ProfileListParams};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use service_core::error::AppError;

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state
        .profiles
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Profile not found")))?;

    Ok(Json(profile))
}

/// Create with a store-generated identifier.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profiles.create(request.name).await.map_err(|e| {
        tracing::error!("Failed to create profile: {}", e);
        AppError::BadRequest(anyhow::anyhow!("Failed to create profile: {}", e))
    })?;

    tracing::info!(profile_id = %profile.id, "Successfully saved new profile");

    Ok((
        StatusCode::CREATED,
        format!("Successfully created: {}", profile.id),
    ))
}

/// Create with a caller-supplied identifier. A duplicate id is a client
/// error, not a server fault.
pub async fn create_profile_with_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state
        .profiles
        .create_with_id(id, request.name)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create profile: {}", e);
            AppError::BadRequest(anyhow::anyhow!("Failed to create profile: {}", e))
        })?;

    tracing::info!(profile_id = %profile.id, "Successfully saved new profile");

    Ok((
        StatusCode::CREATED,
        format!("Successfully created: {}", profile.id),
    ))
}

/// Idempotent: deleting a missing id still reports success.
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.profiles.delete_by_id(&id).await?;

    tracing::info!(profile_id = %id, "Profile deleted");

    Ok(format!("Successfully deleted: {}", id))
}

pub async fn list_profiles(
    State(state): State<AppState>,
    Query(params): Query<ProfileListParams>,
) -> Result<impl IntoResponse, AppError> {
    let prefix = params.prefix();
    let profiles = state.profiles.find(prefix.as_deref()).await?;

    Ok(Json(profiles))
}
