use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::profile::provider::ProfileProvider;
use crate::profile::typed::{save_global, UserProfile};
use crate::store::JobBoardStore;

/// Registration shape. Authentication itself lives with the external identity
/// provider; this only creates the profile-facing user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn JobBoardStore>,
    profiles: Arc<dyn ProfileProvider>,
}

impl UserService {
    pub fn new(store: Arc<dyn JobBoardStore>, profiles: Arc<dyn ProfileProvider>) -> Self {
        Self { store, profiles }
    }

    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
    }

    /// Creates the user row and seeds the global profile properties from it.
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        if dto.user_name.trim().is_empty() {
            return Err(AppError::Validation("user_name cannot be empty".to_string()));
        }
        if !dto.email.contains('@') {
            return Err(AppError::Validation("email is not valid".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            user_name: dto.user_name,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            picture_url: dto.picture_url,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.store.insert_user(&user).await?;

        let seed = UserProfile {
            user_name: Some(user.user_name.clone()),
            email: Some(user.email.clone()),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            ..Default::default()
        };
        save_global(self.profiles.as_ref(), user.id, &seed).await?;

        info!("Registered user {} ({})", user.id, user.user_name);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::provider::MemoryProfileProvider;
    use crate::profile::typed;
    use crate::store::memory::MemoryStore;

    fn service() -> (UserService, Arc<MemoryProfileProvider>) {
        let store = Arc::new(MemoryStore::default());
        let profiles = Arc::new(MemoryProfileProvider::default());
        (UserService::new(store, profiles.clone()), profiles)
    }

    #[tokio::test]
    async fn create_seeds_global_profile_properties() {
        let (service, profiles) = service();

        let user = service
            .create(CreateUserDto {
                user_name: "jdoe".to_string(),
                email: "jdoe@example.com".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                picture_url: None,
            })
            .await
            .unwrap();

        let profile = typed::load(profiles.as_ref(), user.id).await.unwrap();
        assert_eq!(profile.user_name.as_deref(), Some("jdoe"));
        assert_eq!(profile.email.as_deref(), Some("jdoe@example.com"));
        assert_eq!(profile.first_name.as_deref(), Some("Jane"));
        assert_eq!(profile.last_name.as_deref(), Some("Doe"));
    }

    #[tokio::test]
    async fn create_rejects_invalid_email() {
        let (service, _) = service();
        let err = service
            .create(CreateUserDto {
                user_name: "jdoe".to_string(),
                email: "not-an-email".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                picture_url: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
