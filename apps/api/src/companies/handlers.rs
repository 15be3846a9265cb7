use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::companies::service::CreateCompanyDto;
use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::job_posting::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub company: CreateCompanyDto,
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    Ok(Json(state.companies.list().await?))
}

/// POST /api/v1/companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let company = state
        .companies
        .create(request.user_id, request.company)
        .await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(state.companies.get(id).await?))
}

/// GET /api/v1/companies/by-user/:user_id
pub async fn handle_get_company_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(state.companies.get_by_user(user_id).await?))
}

/// PUT /api/v1/companies/:id
pub async fn handle_update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateCompanyDto>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(state.companies.update(id, dto).await?))
}

/// DELETE /api/v1/companies/:id
/// Removes the company and all of its postings.
pub async fn handle_delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.companies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/companies/:id/jobs
pub async fn handle_list_company_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.jobs.list_by_company(id).await?))
}
