use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::typed::{self, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobSeekerUpdate {
    pub user_id: Uuid,
    pub resume_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct EmployerUpdate {
    pub user_id: Uuid,
    pub company_id: Uuid,
}

/// GET /api/v1/profile?user_id=…
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = typed::load(state.profiles.as_ref(), params.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
/// Writes the global properties that are present and returns the full profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let update = UserProfile {
        user_name: request.user_name,
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        ..Default::default()
    };
    typed::save_global(state.profiles.as_ref(), request.user_id, &update).await?;

    let profile = typed::load(state.profiles.as_ref(), request.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/jobseeker
pub async fn handle_update_jobseeker(
    State(state): State<AppState>,
    Json(request): Json<JobSeekerUpdate>,
) -> Result<StatusCode, AppError> {
    typed::set_jobseeker_resume(state.profiles.as_ref(), request.user_id, request.resume_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/profile/employer
pub async fn handle_update_employer(
    State(state): State<AppState>,
    Json(request): Json<EmployerUpdate>,
) -> Result<StatusCode, AppError> {
    typed::set_employer_company(state.profiles.as_ref(), request.user_id, request.company_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
