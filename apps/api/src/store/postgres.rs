use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::Company;
use crate::models::favorite::{SavedJob, SavedResume};
use crate::models::job_posting::JobPosting;
use crate::models::reference::{Country, EducationLevel, JobType, State};
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::{JobBoardStore, JobSearch, ResumeSearch, StoreError};

/// PostgreSQL-backed store. Multi-row mutations run inside one transaction.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_err(e: sqlx::Error, what: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::Conflict(format!("{what} already exists"));
        }
        if db.is_foreign_key_violation() {
            return StoreError::Conflict(format!("{what} references a missing row"));
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, StoreError> {
        Ok(
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn get_company_by_user(&self, user_id: Uuid) -> Result<Option<Company>, StoreError> {
        Ok(
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        Ok(
            sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY company_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn insert_company(&self, company: &Company) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO companies
                (id, user_id, company_name, brief_profile, address1, address2, city,
                 state_id, country_id, postal_code, phone, fax, email, website_url,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(company.id)
        .bind(company.user_id)
        .bind(&company.company_name)
        .bind(&company.brief_profile)
        .bind(&company.address1)
        .bind(&company.address2)
        .bind(&company.city)
        .bind(company.state_id)
        .bind(company.country_id)
        .bind(&company.postal_code)
        .bind(&company.phone)
        .bind(&company.fax)
        .bind(&company.email)
        .bind(&company.website_url)
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "company"))?;
        Ok(())
    }

    async fn update_company(&self, company: &Company) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE companies SET
                company_name = $2, brief_profile = $3, address1 = $4, address2 = $5,
                city = $6, state_id = $7, country_id = $8, postal_code = $9,
                phone = $10, fax = $11, email = $12, website_url = $13, updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(company.id)
        .bind(&company.company_name)
        .bind(&company.brief_profile)
        .bind(&company.address1)
        .bind(&company.address2)
        .bind(&company.city)
        .bind(company.state_id)
        .bind(company.country_id)
        .bind(&company.postal_code)
        .bind(&company.phone)
        .bind(&company.fax)
        .bind(&company.email)
        .bind(&company.website_url)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "Company {} not found",
                company.id
            )));
        }
        Ok(())
    }

    async fn delete_company(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM saved_jobs WHERE job_id IN
                (SELECT id FROM job_postings WHERE company_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM job_postings WHERE company_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(format!("Company {id} not found")));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        Ok(
            sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_jobs_by_company(&self, company_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        Ok(sqlx::query_as::<_, JobPosting>(
            "SELECT * FROM job_postings WHERE company_id = $1 ORDER BY posted_date DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<JobPosting>, StoreError> {
        Ok(sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT * FROM job_postings
            WHERE is_active
              AND ($1::text IS NULL OR title ILIKE '%' || $1 || '%'
                                    OR description ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR city ILIKE '%' || $2 || '%')
            ORDER BY posted_date DESC
            LIMIT $3
            "#,
        )
        .bind(&search.keyword)
        .bind(&search.city)
        .bind(search.limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_job(&self, job: &JobPosting) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO job_postings
                (id, company_id, title, description, department, job_code, contact_person,
                 city, state_id, country_id, education_level_id, job_type_id,
                 min_salary, max_salary, posted_date, posted_by, is_active,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19)
            "#,
        )
        .bind(job.id)
        .bind(job.company_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.department)
        .bind(&job.job_code)
        .bind(&job.contact_person)
        .bind(&job.city)
        .bind(job.state_id)
        .bind(job.country_id)
        .bind(job.education_level_id)
        .bind(job.job_type_id)
        .bind(job.min_salary)
        .bind(job.max_salary)
        .bind(job.posted_date)
        .bind(&job.posted_by)
        .bind(job.is_active)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "job posting"))?;
        Ok(())
    }

    async fn update_job(&self, job: &JobPosting) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE job_postings SET
                title = $2, description = $3, department = $4, job_code = $5,
                contact_person = $6, city = $7, state_id = $8, country_id = $9,
                education_level_id = $10, job_type_id = $11, min_salary = $12,
                max_salary = $13, is_active = $14, updated_at = $15
            WHERE id = $1
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.department)
        .bind(&job.job_code)
        .bind(&job.contact_person)
        .bind(&job.city)
        .bind(job.state_id)
        .bind(job.country_id)
        .bind(job.education_level_id)
        .bind(job.job_type_id)
        .bind(job.min_salary)
        .bind(job.max_salary)
        .bind(job.is_active)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Job {} not found", job.id)));
        }
        Ok(())
    }

    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM saved_jobs WHERE job_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(format!("Job {id} not found")));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>, StoreError> {
        Ok(
            sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_resumes_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn search_resumes(&self, search: &ResumeSearch) -> Result<Vec<Resume>, StoreError> {
        Ok(sqlx::query_as::<_, Resume>(
            r#"
            SELECT * FROM resumes
            WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%'
                                    OR content ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(&search.keyword)
        .bind(search.limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_resume(&self, resume: &Resume) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, title, content, file_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(resume.id)
        .bind(resume.user_id)
        .bind(&resume.title)
        .bind(&resume.content)
        .bind(&resume.file_url)
        .bind(resume.created_at)
        .bind(resume.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "resume"))?;
        Ok(())
    }

    async fn update_resume(&self, resume: &Resume) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE resumes SET title = $2, content = $3, file_url = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(resume.id)
        .bind(&resume.title)
        .bind(&resume.content)
        .bind(&resume.file_url)
        .bind(resume.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "Resume {} not found",
                resume.id
            )));
        }
        Ok(())
    }

    async fn delete_resume(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM saved_resumes WHERE resume_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::NotFound(format!("Resume {id} not found")));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn insert_saved_job(&self, saved: &SavedJob) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO saved_jobs (user_id, job_id, saved_at) VALUES ($1, $2, $3)",
        )
        .bind(saved.user_id)
        .bind(saved.job_id)
        .bind(saved.saved_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "saved job"))?;
        Ok(())
    }

    async fn delete_saved_job(&self, user_id: Uuid, job_id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "Job {job_id} is not in user {user_id}'s favorites"
            )));
        }
        Ok(())
    }

    async fn list_saved_jobs(&self, user_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        Ok(sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT j.* FROM job_postings j
            JOIN saved_jobs s ON s.job_id = j.id
            WHERE s.user_id = $1
            ORDER BY s.saved_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_saved_resume(&self, saved: &SavedResume) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO saved_resumes (user_id, resume_id, saved_at) VALUES ($1, $2, $3)",
        )
        .bind(saved.user_id)
        .bind(saved.resume_id)
        .bind(saved.saved_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "saved resume"))?;
        Ok(())
    }

    async fn delete_saved_resume(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
    ) -> Result<(), StoreError> {
        let result =
            sqlx::query("DELETE FROM saved_resumes WHERE user_id = $1 AND resume_id = $2")
                .bind(user_id)
                .bind(resume_id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "Resume {resume_id} is not in user {user_id}'s favorites"
            )));
        }
        Ok(())
    }

    async fn list_saved_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        Ok(sqlx::query_as::<_, Resume>(
            r#"
            SELECT r.* FROM resumes r
            JOIN saved_resumes s ON s.resume_id = r.id
            WHERE s.user_id = $1
            ORDER BY s.saved_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, user_name, email, first_name, last_name, picture_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.picture_url)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, "user"))?;
        Ok(())
    }

    async fn list_countries(&self) -> Result<Vec<Country>, StoreError> {
        Ok(
            sqlx::query_as::<_, Country>("SELECT * FROM countries ORDER BY country_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_states(&self, country_id: i32) -> Result<Vec<State>, StoreError> {
        Ok(sqlx::query_as::<_, State>(
            "SELECT * FROM states WHERE country_id = $1 ORDER BY state_name",
        )
        .bind(country_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_education_levels(&self) -> Result<Vec<EducationLevel>, StoreError> {
        Ok(
            sqlx::query_as::<_, EducationLevel>("SELECT * FROM education_levels ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_job_types(&self) -> Result<Vec<JobType>, StoreError> {
        Ok(
            sqlx::query_as::<_, JobType>("SELECT * FROM job_types ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
