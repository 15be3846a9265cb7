use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::keys;
use crate::profile::provider::ProfileProvider;

/// Typed view of a user's profile. Group properties live in nested structs;
/// the flat storage keys they map to are fixed in [`crate::profile::keys`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_seeker: JobSeekerGroup,
    pub employer: EmployerGroup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSeekerGroup {
    pub resume_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployerGroup {
    pub company_id: Option<Uuid>,
}

/// Loads the full typed profile for a user.
pub async fn load(provider: &dyn ProfileProvider, user_id: Uuid) -> Result<UserProfile, AppError> {
    Ok(UserProfile {
        user_name: provider.get(user_id, keys::USER_NAME).await?,
        email: provider.get(user_id, keys::EMAIL).await?,
        first_name: provider.get(user_id, keys::FIRST_NAME).await?,
        last_name: provider.get(user_id, keys::LAST_NAME).await?,
        job_seeker: JobSeekerGroup {
            resume_id: get_uuid(provider, user_id, keys::JOBSEEKER_RESUME_ID).await?,
        },
        employer: EmployerGroup {
            company_id: get_uuid(provider, user_id, keys::EMPLOYER_COMPANY_ID).await?,
        },
    })
}

/// Writes the global (ungrouped) profile fields that are present.
pub async fn save_global(
    provider: &dyn ProfileProvider,
    user_id: Uuid,
    profile: &UserProfile,
) -> Result<(), AppError> {
    if let Some(v) = &profile.user_name {
        provider.set(user_id, keys::USER_NAME, v).await?;
    }
    if let Some(v) = &profile.email {
        provider.set(user_id, keys::EMAIL, v).await?;
    }
    if let Some(v) = &profile.first_name {
        provider.set(user_id, keys::FIRST_NAME, v).await?;
    }
    if let Some(v) = &profile.last_name {
        provider.set(user_id, keys::LAST_NAME, v).await?;
    }
    Ok(())
}

/// Records the resume owned by a job seeker (`JobSeeker.ResumeID`).
pub async fn set_jobseeker_resume(
    provider: &dyn ProfileProvider,
    user_id: Uuid,
    resume_id: Uuid,
) -> Result<(), AppError> {
    provider
        .set(user_id, keys::JOBSEEKER_RESUME_ID, &resume_id.to_string())
        .await
}

/// Records the company owned by an employer (`Employer.CompanyID`).
pub async fn set_employer_company(
    provider: &dyn ProfileProvider,
    user_id: Uuid,
    company_id: Uuid,
) -> Result<(), AppError> {
    provider
        .set(user_id, keys::EMPLOYER_COMPANY_ID, &company_id.to_string())
        .await
}

async fn get_uuid(
    provider: &dyn ProfileProvider,
    user_id: Uuid,
    name: &str,
) -> Result<Option<Uuid>, AppError> {
    match provider.get(user_id, name).await? {
        None => Ok(None),
        Some(raw) => raw
            .parse::<Uuid>()
            .map(Some)
            .map_err(|_| AppError::Profile(format!("Profile property '{name}' holds a non-id value"))),
    }
}
