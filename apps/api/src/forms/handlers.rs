use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::forms::confirm::ConfirmButton;
use crate::forms::counter::{counter_state, CounterState};
use crate::forms::selects::{
    country_options, education_level_options, job_type_options, state_options, SelectOption,
    COUNTRY_FIELD, STATE_FIELD,
};
use crate::state::AppState;

const BRIEF_PROFILE_MAXLENGTH: usize = 500;
const DESCRIPTION_MAXLENGTH: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct FormOptionsQuery {
    /// States are scoped to the selected country; 0/absent yields none.
    #[serde(default)]
    pub country_id: i32,
}

/// A `maxlength`-bound textarea with its initial counter state.
#[derive(Debug, Serialize)]
pub struct TextareaField {
    pub name: &'static str,
    pub maxlength: usize,
    pub counter: CounterState,
}

#[derive(Debug, Serialize)]
pub struct LocationSelects {
    pub country_field: &'static str,
    pub state_field: &'static str,
    pub countries: Vec<SelectOption>,
    pub states: Vec<SelectOption>,
}

#[derive(Debug, Serialize)]
pub struct CompanyFormResponse {
    pub location: LocationSelects,
    pub brief_profile: TextareaField,
    pub delete_confirm: ConfirmButton,
}

#[derive(Debug, Serialize)]
pub struct JobFormResponse {
    pub location: LocationSelects,
    pub education_levels: Vec<SelectOption>,
    pub job_types: Vec<SelectOption>,
    pub description: TextareaField,
    pub delete_confirm: ConfirmButton,
}

async fn location_selects(
    state: &AppState,
    country_id: i32,
) -> Result<LocationSelects, AppError> {
    let countries = state.store.list_countries().await?;
    let states = if country_id > 0 {
        state.store.list_states(country_id).await?
    } else {
        Vec::new()
    };
    Ok(LocationSelects {
        country_field: COUNTRY_FIELD,
        state_field: STATE_FIELD,
        countries: country_options(&countries),
        states: state_options(&states),
    })
}

/// GET /api/v1/forms/company-profile
/// Widget metadata the templated front end binds the company form to.
pub async fn handle_company_form(
    State(state): State<AppState>,
    Query(params): Query<FormOptionsQuery>,
) -> Result<Json<CompanyFormResponse>, AppError> {
    Ok(Json(CompanyFormResponse {
        location: location_selects(&state, params.country_id).await?,
        brief_profile: TextareaField {
            name: "brief_profile",
            maxlength: BRIEF_PROFILE_MAXLENGTH,
            counter: counter_state(0, BRIEF_PROFILE_MAXLENGTH),
        },
        delete_confirm: ConfirmButton::new("Delete this company?"),
    }))
}

/// GET /api/v1/forms/job-posting
pub async fn handle_job_form(
    State(state): State<AppState>,
    Query(params): Query<FormOptionsQuery>,
) -> Result<Json<JobFormResponse>, AppError> {
    let education_levels = state.store.list_education_levels().await?;
    let job_types = state.store.list_job_types().await?;

    Ok(Json(JobFormResponse {
        location: location_selects(&state, params.country_id).await?,
        education_levels: education_level_options(&education_levels),
        job_types: job_type_options(&job_types),
        description: TextareaField {
            name: "description",
            maxlength: DESCRIPTION_MAXLENGTH,
            counter: counter_state(0, DESCRIPTION_MAXLENGTH),
        },
        delete_confirm: ConfirmButton::new("Delete this job posting?"),
    }))
}
