use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::reference::{Country, EducationLevel, JobType, State as StateRow};
use crate::state::AppState;

/// GET /api/v1/reference/countries
pub async fn handle_list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, AppError> {
    Ok(Json(state.store.list_countries().await?))
}

/// GET /api/v1/reference/countries/:id/states
pub async fn handle_list_states(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<Json<Vec<StateRow>>, AppError> {
    Ok(Json(state.store.list_states(country_id).await?))
}

/// GET /api/v1/reference/education-levels
pub async fn handle_list_education_levels(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationLevel>>, AppError> {
    Ok(Json(state.store.list_education_levels().await?))
}

/// GET /api/v1/reference/job-types
pub async fn handle_list_job_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobType>>, AppError> {
    Ok(Json(state.store.list_job_types().await?))
}
