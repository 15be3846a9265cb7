use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::service::CreateJobPostingDto;
use crate::models::job_posting::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company_id: Uuid,
    pub posted_by: String,
    #[serde(flatten)]
    pub job: CreateJobPostingDto,
}

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub limit: Option<i64>,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let job = state
        .jobs
        .create(request.company_id, &request.posted_by, request.job)
        .await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/search
/// Active postings only, newest first.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state
        .jobs
        .search(params.keyword, params.city, params.limit)
        .await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    Ok(Json(state.jobs.get(id).await?))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateJobPostingDto>,
) -> Result<Json<JobPosting>, AppError> {
    Ok(Json(state.jobs.update(id, dto).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.jobs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
