use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A posting saved to a job seeker's favorites. One row per (user, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJob {
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

/// A resume saved to an employer's favorites. One row per (user, resume) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedResume {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub saved_at: DateTime<Utc>,
}
