use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resumes::service::CreateResumeDto;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub resume: CreateResumeDto,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ResumeSearchQuery {
    pub keyword: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/resumes?user_id=…
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.resumes.list_by_user(params.user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let resume = state
        .resumes
        .create(request.user_id, request.resume)
        .await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/search
pub async fn handle_search_resumes(
    State(state): State<AppState>,
    Query(params): Query<ResumeSearchQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(
        state.resumes.search(params.keyword, params.limit).await?,
    ))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.resumes.get(id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateResumeDto>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.resumes.update(id, dto).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.resumes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
