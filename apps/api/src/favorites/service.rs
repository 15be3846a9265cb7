use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::favorite::{SavedJob, SavedResume};
use crate::models::job_posting::JobPosting;
use crate::models::resume::Resume;
use crate::store::JobBoardStore;

/// Saved favorites: postings a job seeker tracks, resumes an employer tracks.
/// One row per (user, entity) pair; saving twice is a conflict.
#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<dyn JobBoardStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn JobBoardStore>) -> Self {
        Self { store }
    }

    pub async fn save_job(&self, user_id: Uuid, job_id: Uuid) -> Result<SavedJob, AppError> {
        if self.store.get_job(job_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "job_id {job_id} does not reference an existing posting"
            )));
        }
        let saved = SavedJob {
            user_id,
            job_id,
            saved_at: Utc::now(),
        };
        self.store.insert_saved_job(&saved).await?;
        info!("User {user_id} saved job {job_id}");
        Ok(saved)
    }

    pub async fn unsave_job(&self, user_id: Uuid, job_id: Uuid) -> Result<(), AppError> {
        self.store.delete_saved_job(user_id, job_id).await?;
        Ok(())
    }

    /// The user's saved postings, most recently saved first.
    pub async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.store.list_saved_jobs(user_id).await?)
    }

    pub async fn save_resume(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
    ) -> Result<SavedResume, AppError> {
        if self.store.get_resume(resume_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "resume_id {resume_id} does not reference an existing resume"
            )));
        }
        let saved = SavedResume {
            user_id,
            resume_id,
            saved_at: Utc::now(),
        };
        self.store.insert_saved_resume(&saved).await?;
        info!("User {user_id} saved resume {resume_id}");
        Ok(saved)
    }

    pub async fn unsave_resume(&self, user_id: Uuid, resume_id: Uuid) -> Result<(), AppError> {
        self.store.delete_saved_resume(user_id, resume_id).await?;
        Ok(())
    }

    pub async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, AppError> {
        Ok(self.store.list_saved_resumes(user_id).await?)
    }
}
