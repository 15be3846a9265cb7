use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lookup rows used to populate form dropdowns. Ids are small and stable,
/// seeded once; they are referenced by companies and job postings.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Country {
    pub id: i32,
    pub country_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct State {
    pub id: i32,
    pub country_id: i32,
    pub state_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationLevel {
    pub id: i32,
    pub education_level_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobType {
    pub id: i32,
    pub job_type_name: String,
}
