#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. Belongs to exactly one company.
/// Salary bounds are whole currency units; either side may be open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub department: String,
    pub job_code: String,
    pub contact_person: String,
    pub city: String,
    pub state_id: i32,
    pub country_id: i32,
    pub education_level_id: i32,
    pub job_type_id: i32,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub posted_date: DateTime<Utc>,
    pub posted_by: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobPosting {
    /// Human-readable salary band for listings.
    pub fn salary_range(&self) -> String {
        match (self.min_salary, self.max_salary) {
            (Some(min), Some(max)) => format!("${min} - ${max}"),
            (Some(min), None) => format!("From ${min}"),
            (None, Some(max)) => format!("Up to ${max}"),
            (None, None) => "Not specified".to_string(),
        }
    }
}
