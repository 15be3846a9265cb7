use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::profile::provider::ProfileProvider;
use crate::profile::typed::set_jobseeker_resume;
use crate::store::{JobBoardStore, ResumeSearch};

const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 100;

/// Mutation shape for resumes, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResumeDto {
    pub title: String,
    pub content: String,
    pub file_url: Option<String>,
}

#[derive(Clone)]
pub struct ResumeService {
    store: Arc<dyn JobBoardStore>,
    profiles: Arc<dyn ProfileProvider>,
}

impl ResumeService {
    pub fn new(store: Arc<dyn JobBoardStore>, profiles: Arc<dyn ProfileProvider>) -> Self {
        Self { store, profiles }
    }

    pub async fn get(&self, id: Uuid) -> Result<Resume, AppError> {
        self.store
            .get_resume(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, AppError> {
        Ok(self.store.list_resumes_by_user(user_id).await?)
    }

    pub async fn search(
        &self,
        keyword: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<Resume>, AppError> {
        let search = ResumeSearch {
            keyword: keyword.and_then(|k| {
                let trimmed = k.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            }),
            limit: limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT),
        };
        Ok(self.store.search_resumes(&search).await?)
    }

    /// Creates a resume for `user_id` and records `JobSeeker.ResumeID` in the
    /// owner's profile.
    ///
    /// The row insert and the profile write go to separate stores with no
    /// shared transaction: if the profile write fails, the resume row remains
    /// without a recorded linkage. `PUT /api/v1/profile/jobseeker`
    /// re-establishes it.
    pub async fn create(&self, user_id: Uuid, dto: CreateResumeDto) -> Result<Resume, AppError> {
        validate(&dto)?;

        let resume = Resume {
            id: Uuid::new_v4(),
            user_id,
            title: dto.title,
            content: dto.content,
            file_url: dto.file_url,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.store.insert_resume(&resume).await?;
        set_jobseeker_resume(self.profiles.as_ref(), user_id, resume.id).await?;

        info!("Created resume {} for user {user_id}", resume.id);
        Ok(resume)
    }

    pub async fn update(&self, id: Uuid, dto: CreateResumeDto) -> Result<Resume, AppError> {
        validate(&dto)?;

        let mut resume = self.get(id).await?;
        resume.title = dto.title;
        resume.content = dto.content;
        resume.file_url = dto.file_url;
        resume.updated_at = Some(Utc::now());

        self.store.update_resume(&resume).await?;
        Ok(resume)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete_resume(id).await?;
        info!("Deleted resume {id}");
        Ok(())
    }
}

fn validate(dto: &CreateResumeDto) -> Result<(), AppError> {
    if dto.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if dto.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::provider::MemoryProfileProvider;
    use crate::profile::typed;
    use crate::store::memory::MemoryStore;

    fn service() -> (ResumeService, Arc<MemoryProfileProvider>) {
        let store = Arc::new(MemoryStore::default());
        let profiles = Arc::new(MemoryProfileProvider::default());
        (ResumeService::new(store, profiles.clone()), profiles)
    }

    fn dto() -> CreateResumeDto {
        CreateResumeDto {
            title: "Senior Backend Engineer".to_string(),
            content: "Ten years of Rust and Postgres".to_string(),
            file_url: None,
        }
    }

    #[tokio::test]
    async fn create_records_resume_id_in_jobseeker_profile() {
        let (service, profiles) = service();
        let user = Uuid::new_v4();

        let resume = service.create(user, dto()).await.unwrap();

        let profile = typed::load(profiles.as_ref(), user).await.unwrap();
        assert_eq!(profile.job_seeker.resume_id, Some(resume.id));
    }

    #[tokio::test]
    async fn create_rejects_blank_content() {
        let (service, _) = service();
        let mut bad = dto();
        bad.content = String::new();

        let err = service.create(Uuid::new_v4(), bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_keeps_owner_and_stamps_updated_at() {
        let (service, _) = service();
        let user = Uuid::new_v4();
        let resume = service.create(user, dto()).await.unwrap();

        let mut changed = dto();
        changed.title = "Staff Engineer".to_string();
        let updated = service.update(resume.id, changed).await.unwrap();

        assert_eq!(updated.user_id, user);
        assert_eq!(updated.title, "Staff Engineer");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn search_matches_title_and_content() {
        let (service, _) = service();
        service.create(Uuid::new_v4(), dto()).await.unwrap();

        let by_title = service
            .search(Some("backend".to_string()), None)
            .await
            .unwrap();
        assert_eq!(by_title.len(), 1);

        let by_content = service
            .search(Some("postgres".to_string()), None)
            .await
            .unwrap();
        assert_eq!(by_content.len(), 1);

        let none = service.search(Some("haskell".to_string()), None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn missing_resume_is_not_found() {
        let (service, _) = service();
        assert!(matches!(
            service.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
