use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::Company;
use crate::profile::provider::ProfileProvider;
use crate::profile::typed::set_employer_company;
use crate::store::JobBoardStore;

/// Mutation shape for companies. Field set mirrors the entity's writable
/// fields; `id`/`created_at` are system-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyDto {
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
}

#[derive(Clone)]
pub struct CompanyService {
    store: Arc<dyn JobBoardStore>,
    profiles: Arc<dyn ProfileProvider>,
}

impl CompanyService {
    pub fn new(store: Arc<dyn JobBoardStore>, profiles: Arc<dyn ProfileProvider>) -> Self {
        Self { store, profiles }
    }

    pub async fn get(&self, id: Uuid) -> Result<Company, AppError> {
        self.store
            .get_company(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Company, AppError> {
        self.store
            .get_company_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No company for user {user_id}")))
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        Ok(self.store.list_companies().await?)
    }

    /// Creates the company owned by `user_id` and records `Employer.CompanyID`
    /// in the owner's profile. One company per account.
    ///
    /// The row insert and the profile write go to separate stores with no
    /// shared transaction: if the profile write fails, the company row remains
    /// without a recorded linkage. `PUT /api/v1/profile/employer` re-establishes
    /// it.
    pub async fn create(&self, user_id: Uuid, dto: CreateCompanyDto) -> Result<Company, AppError> {
        validate(&dto)?;

        if self.store.get_company_by_user(user_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User {user_id} already owns a company"
            )));
        }

        let mut company = Company {
            id: Uuid::new_v4(),
            user_id,
            company_name: String::new(),
            brief_profile: String::new(),
            address1: String::new(),
            address2: None,
            city: String::new(),
            state_id: 0,
            country_id: 0,
            postal_code: String::new(),
            phone: String::new(),
            fax: None,
            email: String::new(),
            website_url: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        apply(&mut company, dto);

        self.store.insert_company(&company).await?;
        set_employer_company(self.profiles.as_ref(), user_id, company.id).await?;

        info!("Created company {} for user {user_id}", company.id);
        Ok(company)
    }

    pub async fn update(&self, id: Uuid, dto: CreateCompanyDto) -> Result<Company, AppError> {
        validate(&dto)?;

        let mut company = self.get(id).await?;
        apply(&mut company, dto);
        company.updated_at = Some(Utc::now());

        self.store.update_company(&company).await?;
        Ok(company)
    }

    /// Deletes the company together with its postings (one unit of work).
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete_company(id).await?;
        info!("Deleted company {id}");
        Ok(())
    }
}

/// Copies every DTO field verbatim onto the entity.
fn apply(company: &mut Company, dto: CreateCompanyDto) {
    company.company_name = dto.company_name;
    company.brief_profile = dto.brief_profile;
    company.address1 = dto.address1;
    company.address2 = dto.address2;
    company.city = dto.city;
    company.state_id = dto.state_id;
    company.country_id = dto.country_id;
    company.postal_code = dto.postal_code;
    company.phone = dto.phone;
    company.fax = dto.fax;
    company.email = dto.email;
    company.website_url = dto.website_url;
}

fn validate(dto: &CreateCompanyDto) -> Result<(), AppError> {
    let required = [
        ("company_name", &dto.company_name),
        ("address1", &dto.address1),
        ("city", &dto.city),
        ("postal_code", &dto.postal_code),
        ("phone", &dto.phone),
        ("email", &dto.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }
    if !dto.email.contains('@') {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if dto.country_id <= 0 || dto.state_id <= 0 {
        return Err(AppError::Validation(
            "country_id and state_id must be selected".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::provider::MemoryProfileProvider;
    use crate::profile::typed;
    use crate::store::memory::MemoryStore;

    fn service() -> (CompanyService, Arc<MemoryStore>, Arc<MemoryProfileProvider>) {
        let store = Arc::new(MemoryStore::default());
        let profiles = Arc::new(MemoryProfileProvider::default());
        (
            CompanyService::new(store.clone(), profiles.clone()),
            store,
            profiles,
        )
    }

    fn dto() -> CreateCompanyDto {
        CreateCompanyDto {
            company_name: "Acme Corp".to_string(),
            brief_profile: "Roadrunner supplies".to_string(),
            address1: "1 Desert Rd".to_string(),
            address2: Some("Suite 9".to_string()),
            city: "Tucson".to_string(),
            state_id: 1,
            country_id: 1,
            postal_code: "85701".to_string(),
            phone: "555-0100".to_string(),
            fax: None,
            email: "hr@acme.test".to_string(),
            website_url: Some("https://acme.test".to_string()),
        }
    }

    #[tokio::test]
    async fn create_copies_dto_fields_verbatim() {
        let (service, _, _) = service();
        let user = Uuid::new_v4();
        let input = dto();

        let company = service.create(user, input.clone()).await.unwrap();

        assert_eq!(company.user_id, user);
        assert_eq!(company.company_name, input.company_name);
        assert_eq!(company.brief_profile, input.brief_profile);
        assert_eq!(company.address1, input.address1);
        assert_eq!(company.address2, input.address2);
        assert_eq!(company.city, input.city);
        assert_eq!(company.state_id, input.state_id);
        assert_eq!(company.country_id, input.country_id);
        assert_eq!(company.postal_code, input.postal_code);
        assert_eq!(company.phone, input.phone);
        assert_eq!(company.fax, input.fax);
        assert_eq!(company.email, input.email);
        assert_eq!(company.website_url, input.website_url);
        // System-assigned fields.
        assert!(!company.id.is_nil());
        assert!(company.updated_at.is_none());
    }

    #[tokio::test]
    async fn create_records_company_id_in_employer_profile() {
        let (service, _, profiles) = service();
        let user = Uuid::new_v4();

        let company = service.create(user, dto()).await.unwrap();

        let profile = typed::load(profiles.as_ref(), user).await.unwrap();
        assert_eq!(profile.employer.company_id, Some(company.id));
    }

    #[tokio::test]
    async fn second_company_for_user_is_a_conflict() {
        let (service, _, _) = service();
        let user = Uuid::new_v4();

        service.create(user, dto()).await.unwrap();
        let err = service.create(user, dto()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_required_fields() {
        let (service, _, _) = service();
        let mut bad = dto();
        bad.company_name = "  ".to_string();

        let err = service.create(Uuid::new_v4(), bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_unselected_location_ids() {
        let (service, _, _) = service();
        let mut bad = dto();
        bad.country_id = 0;

        let err = service.create(Uuid::new_v4(), bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_applies_dto_and_stamps_updated_at() {
        let (service, _, _) = service();
        let company = service.create(Uuid::new_v4(), dto()).await.unwrap();

        let mut changed = dto();
        changed.city = "Phoenix".to_string();
        let updated = service.update(company.id, changed).await.unwrap();

        assert_eq!(updated.city, "Phoenix");
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, company.created_at);
    }

    #[tokio::test]
    async fn lookups_on_missing_company_return_not_found() {
        let (service, _, _) = service();

        assert!(matches!(
            service.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_by_user(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
