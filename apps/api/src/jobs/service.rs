use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_posting::JobPosting;
use crate::store::{JobBoardStore, JobSearch};

const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 100;

/// Mutation shape for job postings, used for both create and update.
/// On create the active flag defaults to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobPostingDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_code: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub city: String,
    pub state_id: i32,
    pub country_id: i32,
    pub education_level_id: i32,
    pub job_type_id: i32,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobBoardStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobBoardStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: Uuid) -> Result<JobPosting, AppError> {
        self.store
            .get_job(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<JobPosting>, AppError> {
        // Listing under a missing company is a 404, not an empty page.
        if self.store.get_company(company_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Company {company_id} not found"
            )));
        }
        Ok(self.store.list_jobs_by_company(company_id).await?)
    }

    /// Searches active postings by keyword/city.
    pub async fn search(
        &self,
        keyword: Option<String>,
        city: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<JobPosting>, AppError> {
        let search = JobSearch {
            keyword: normalize_filter(keyword),
            city: normalize_filter(city),
            limit: limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT),
        };
        Ok(self.store.search_jobs(&search).await?)
    }

    /// Creates a posting under `company_id`. The company must exist.
    pub async fn create(
        &self,
        company_id: Uuid,
        posted_by: &str,
        dto: CreateJobPostingDto,
    ) -> Result<JobPosting, AppError> {
        validate(&dto)?;

        if self.store.get_company(company_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "company_id {company_id} does not reference an existing company"
            )));
        }

        let now = Utc::now();
        let mut job = JobPosting {
            id: Uuid::new_v4(),
            company_id,
            title: String::new(),
            description: String::new(),
            department: String::new(),
            job_code: String::new(),
            contact_person: String::new(),
            city: String::new(),
            state_id: 0,
            country_id: 0,
            education_level_id: 0,
            job_type_id: 0,
            min_salary: None,
            max_salary: None,
            posted_date: now,
            posted_by: posted_by.to_string(),
            is_active: true,
            created_at: now,
            updated_at: None,
        };
        apply(&mut job, dto);

        self.store.insert_job(&job).await?;
        info!("Created job {} under company {company_id}", job.id);
        Ok(job)
    }

    pub async fn update(&self, id: Uuid, dto: CreateJobPostingDto) -> Result<JobPosting, AppError> {
        validate(&dto)?;

        let mut job = self.get(id).await?;
        apply(&mut job, dto);
        job.updated_at = Some(Utc::now());

        self.store.update_job(&job).await?;
        Ok(job)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete_job(id).await?;
        info!("Deleted job {id}");
        Ok(())
    }
}

fn apply(job: &mut JobPosting, dto: CreateJobPostingDto) {
    job.title = dto.title;
    job.description = dto.description;
    job.department = dto.department;
    job.job_code = dto.job_code;
    job.contact_person = dto.contact_person;
    job.city = dto.city;
    job.state_id = dto.state_id;
    job.country_id = dto.country_id;
    job.education_level_id = dto.education_level_id;
    job.job_type_id = dto.job_type_id;
    job.min_salary = dto.min_salary;
    job.max_salary = dto.max_salary;
    job.is_active = dto.is_active;
}

fn validate(dto: &CreateJobPostingDto) -> Result<(), AppError> {
    if dto.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if dto.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    if let (Some(min), Some(max)) = (dto.min_salary, dto.max_salary) {
        if min > max {
            return Err(AppError::Validation(
                "min_salary cannot exceed max_salary".to_string(),
            ));
        }
    }
    Ok(())
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::service::{CompanyService, CreateCompanyDto};
    use crate::profile::provider::MemoryProfileProvider;
    use crate::store::memory::MemoryStore;

    fn services() -> (JobService, CompanyService) {
        let store = Arc::new(MemoryStore::default());
        let profiles = Arc::new(MemoryProfileProvider::default());
        (
            JobService::new(store.clone()),
            CompanyService::new(store, profiles),
        )
    }

    fn company_dto() -> CreateCompanyDto {
        CreateCompanyDto {
            company_name: "Acme Corp".to_string(),
            brief_profile: "Roadrunner supplies".to_string(),
            address1: "1 Desert Rd".to_string(),
            address2: None,
            city: "Tucson".to_string(),
            state_id: 1,
            country_id: 1,
            postal_code: "85701".to_string(),
            phone: "555-0100".to_string(),
            fax: None,
            email: "hr@acme.test".to_string(),
            website_url: None,
        }
    }

    fn job_dto() -> CreateJobPostingDto {
        CreateJobPostingDto {
            title: "Rust Engineer".to_string(),
            description: "Build the back end".to_string(),
            department: "Engineering".to_string(),
            job_code: "ENG-42".to_string(),
            contact_person: "Jane Doe".to_string(),
            city: "Tucson".to_string(),
            state_id: 1,
            country_id: 1,
            education_level_id: 2,
            job_type_id: 1,
            min_salary: Some(90_000),
            max_salary: Some(130_000),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_company() {
        let (jobs, _) = services();

        let err = jobs
            .create(Uuid::new_v4(), "hr", job_dto())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_assigns_posting_metadata() {
        let (jobs, companies) = services();
        let company = companies.create(Uuid::new_v4(), company_dto()).await.unwrap();

        let job = jobs.create(company.id, "jdoe", job_dto()).await.unwrap();

        assert_eq!(job.company_id, company.id);
        assert_eq!(job.posted_by, "jdoe");
        assert!(job.is_active);
        assert!(job.updated_at.is_none());
    }

    #[tokio::test]
    async fn create_rejects_inverted_salary_band() {
        let (jobs, companies) = services();
        let company = companies.create(Uuid::new_v4(), company_dto()).await.unwrap();

        let mut bad = job_dto();
        bad.min_salary = Some(130_000);
        bad.max_salary = Some(90_000);

        let err = jobs.create(company.id, "hr", bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_can_deactivate_a_posting() {
        let (jobs, companies) = services();
        let company = companies.create(Uuid::new_v4(), company_dto()).await.unwrap();
        let job = jobs.create(company.id, "hr", job_dto()).await.unwrap();

        let mut dto = job_dto();
        dto.is_active = false;
        let updated = jobs.update(job.id, dto).await.unwrap();

        assert!(!updated.is_active);
        assert!(updated.updated_at.is_some());

        let found = jobs.search(Some("rust".to_string()), None, None).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn list_by_company_requires_the_company() {
        let (jobs, _) = services();
        assert!(matches!(
            jobs.list_by_company(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn search_trims_blank_filters() {
        let (jobs, companies) = services();
        let company = companies.create(Uuid::new_v4(), company_dto()).await.unwrap();
        jobs.create(company.id, "hr", job_dto()).await.unwrap();

        // Blank keyword behaves like no keyword.
        let found = jobs
            .search(Some("   ".to_string()), None, Some(10))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
