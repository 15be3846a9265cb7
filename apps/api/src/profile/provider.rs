use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::require_property;

/// The generic per-user settings store behind the typed profile layer.
/// Implementations persist string values keyed by registered property name.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn get(&self, user_id: Uuid, name: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, user_id: Uuid, name: &str, value: &str) -> Result<(), AppError>;
}

/// PostgreSQL-backed provider over the `profile_properties` table.
pub struct PgProfileProvider {
    pool: PgPool,
}

impl PgProfileProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileProvider for PgProfileProvider {
    async fn get(&self, user_id: Uuid, name: &str) -> Result<Option<String>, AppError> {
        require_property(name)?;
        let value: Option<String> = sqlx::query_scalar(
            "SELECT value FROM profile_properties WHERE user_id = $1 AND name = $2",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(value)
    }

    async fn set(&self, user_id: Uuid, name: &str, value: &str) -> Result<(), AppError> {
        require_property(name)?;
        sqlx::query(
            r#"
            INSERT INTO profile_properties (user_id, name, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, name) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// In-memory provider used by tests.
#[derive(Default)]
pub struct MemoryProfileProvider {
    entries: std::sync::RwLock<std::collections::HashMap<(Uuid, String), String>>,
}

#[async_trait]
impl ProfileProvider for MemoryProfileProvider {
    async fn get(&self, user_id: Uuid, name: &str) -> Result<Option<String>, AppError> {
        require_property(name)?;
        let entries = self.entries.read().unwrap();
        Ok(entries.get(&(user_id, name.to_string())).cloned())
    }

    async fn set(&self, user_id: Uuid, name: &str, value: &str) -> Result<(), AppError> {
        require_property(name)?;
        let mut entries = self.entries.write().unwrap();
        entries.insert((user_id, name.to_string()), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::keys;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let provider = MemoryProfileProvider::default();
        let user = Uuid::new_v4();

        provider.set(user, keys::EMAIL, "a@b.com").await.unwrap();
        assert_eq!(
            provider.get(user, keys::EMAIL).await.unwrap(),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn unset_property_reads_as_none() {
        let provider = MemoryProfileProvider::default();
        let user = Uuid::new_v4();
        assert_eq!(provider.get(user, keys::FIRST_NAME).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unregistered_name_is_a_configuration_error() {
        let provider = MemoryProfileProvider::default();
        let user = Uuid::new_v4();

        let get = provider.get(user, "FavoriteColor").await;
        assert!(matches!(get, Err(AppError::Profile(_))));

        let set = provider.set(user, "FavoriteColor", "blue").await;
        assert!(matches!(set, Err(AppError::Profile(_))));
    }

    #[tokio::test]
    async fn grouped_and_global_values_do_not_collide() {
        let provider = MemoryProfileProvider::default();
        let user = Uuid::new_v4();

        let resume = Uuid::new_v4().to_string();
        let company = Uuid::new_v4().to_string();
        provider
            .set(user, keys::JOBSEEKER_RESUME_ID, &resume)
            .await
            .unwrap();
        provider
            .set(user, keys::EMPLOYER_COMPANY_ID, &company)
            .await
            .unwrap();
        provider.set(user, keys::EMAIL, "a@b.com").await.unwrap();

        assert_eq!(
            provider.get(user, keys::JOBSEEKER_RESUME_ID).await.unwrap(),
            Some(resume)
        );
        assert_eq!(
            provider.get(user, keys::EMPLOYER_COMPANY_ID).await.unwrap(),
            Some(company)
        );
        assert_eq!(
            provider.get(user, keys::EMAIL).await.unwrap(),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn values_are_partitioned_per_user() {
        let provider = MemoryProfileProvider::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        provider.set(alice, keys::EMAIL, "alice@b.com").await.unwrap();
        assert_eq!(provider.get(bob, keys::EMAIL).await.unwrap(), None);
    }
}
