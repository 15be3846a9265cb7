use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employer's company record. `user_id` is unique: one company per account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub brief_profile: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state_id: i32,
    pub country_id: i32,
    pub postal_code: String,
    pub phone: String,
    pub fax: Option<String>,
    pub email: String,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
