//! Persistence context: the aggregate root owning every entity collection.
//! Services depend on the [`JobBoardStore`] trait; the engine behind it is an
//! implementation detail ([`postgres::PgStore`] in production,
//! [`memory::MemoryStore`] in tests).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::company::Company;
use crate::models::favorite::{SavedJob, SavedResume};
use crate::models::job_posting::JobPosting;
use crate::models::reference::{Country, EducationLevel, JobType, State};
use crate::models::resume::Resume;
use crate::models::user::User;

/// Error enumeration for store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Filters for the active-postings search.
#[derive(Debug, Clone, Default)]
pub struct JobSearch {
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub limit: i64,
}

/// Filters for resume search.
#[derive(Debug, Clone, Default)]
pub struct ResumeSearch {
    pub keyword: Option<String>,
    pub limit: i64,
}

/// Storage abstraction over all job-board collections. Ids and timestamps are
/// assigned by callers; implementations only persist what they are given.
/// Cancellation is cooperative: dropping a returned future abandons the call.
#[async_trait]
pub trait JobBoardStore: Send + Sync {
    // Companies. `user_id` is unique across companies.
    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, StoreError>;
    async fn get_company_by_user(&self, user_id: Uuid) -> Result<Option<Company>, StoreError>;
    async fn list_companies(&self) -> Result<Vec<Company>, StoreError>;
    async fn insert_company(&self, company: &Company) -> Result<(), StoreError>;
    async fn update_company(&self, company: &Company) -> Result<(), StoreError>;
    /// Deletes the company and its postings in a single unit of work.
    async fn delete_company(&self, id: Uuid) -> Result<(), StoreError>;

    // Job postings.
    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError>;
    async fn list_jobs_by_company(&self, company_id: Uuid) -> Result<Vec<JobPosting>, StoreError>;
    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<JobPosting>, StoreError>;
    async fn insert_job(&self, job: &JobPosting) -> Result<(), StoreError>;
    async fn update_job(&self, job: &JobPosting) -> Result<(), StoreError>;
    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError>;

    // Resumes.
    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>, StoreError>;
    async fn list_resumes_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError>;
    async fn search_resumes(&self, search: &ResumeSearch) -> Result<Vec<Resume>, StoreError>;
    async fn insert_resume(&self, resume: &Resume) -> Result<(), StoreError>;
    async fn update_resume(&self, resume: &Resume) -> Result<(), StoreError>;
    async fn delete_resume(&self, id: Uuid) -> Result<(), StoreError>;

    // Users.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    // Saved favorites. The (user, entity) pair is unique; saved rows are
    // removed together with the entity they point at.
    async fn insert_saved_job(&self, saved: &SavedJob) -> Result<(), StoreError>;
    async fn delete_saved_job(&self, user_id: Uuid, job_id: Uuid) -> Result<(), StoreError>;
    async fn list_saved_jobs(&self, user_id: Uuid) -> Result<Vec<JobPosting>, StoreError>;
    async fn insert_saved_resume(&self, saved: &SavedResume) -> Result<(), StoreError>;
    async fn delete_saved_resume(&self, user_id: Uuid, resume_id: Uuid)
        -> Result<(), StoreError>;
    async fn list_saved_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError>;

    // Reference data.
    async fn list_countries(&self) -> Result<Vec<Country>, StoreError>;
    async fn list_states(&self, country_id: i32) -> Result<Vec<State>, StoreError>;
    async fn list_education_levels(&self) -> Result<Vec<EducationLevel>, StoreError>;
    async fn list_job_types(&self) -> Result<Vec<JobType>, StoreError>;
}
