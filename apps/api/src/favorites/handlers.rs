use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::favorite::{SavedJob, SavedResume};
use crate::models::job_posting::JobPosting;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub user_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub resume_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/favorites/jobs?user_id=…
pub async fn handle_list_saved_jobs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.favorites.list_jobs(params.user_id).await?))
}

/// POST /api/v1/favorites/jobs
pub async fn handle_save_job(
    State(state): State<AppState>,
    Json(request): Json<SaveJobRequest>,
) -> Result<(StatusCode, Json<SavedJob>), AppError> {
    let saved = state
        .favorites
        .save_job(request.user_id, request.job_id)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/favorites/jobs/:job_id?user_id=…
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.favorites.unsave_job(params.user_id, job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/favorites/resumes?user_id=…
pub async fn handle_list_saved_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.favorites.list_resumes(params.user_id).await?))
}

/// POST /api/v1/favorites/resumes
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<SavedResume>), AppError> {
    let saved = state
        .favorites
        .save_resume(request.user_id, request.resume_id)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/favorites/resumes/:resume_id?user_id=…
pub async fn handle_unsave_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state
        .favorites
        .unsave_resume(params.user_id, resume_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
