use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::company::Company;
use crate::models::favorite::{SavedJob, SavedResume};
use crate::models::job_posting::JobPosting;
use crate::models::reference::{Country, EducationLevel, JobType, State};
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::store::{JobBoardStore, JobSearch, ResumeSearch, StoreError};

/// In-memory store used by tests. Mirrors the relational constraints the
/// Postgres schema enforces (unique company per user, cascade on delete).
#[derive(Default)]
pub struct MemoryStore {
    companies: RwLock<HashMap<Uuid, Company>>,
    jobs: RwLock<HashMap<Uuid, JobPosting>>,
    resumes: RwLock<HashMap<Uuid, Resume>>,
    users: RwLock<HashMap<Uuid, User>>,
    saved_jobs: RwLock<HashMap<(Uuid, Uuid), SavedJob>>,
    saved_resumes: RwLock<HashMap<(Uuid, Uuid), SavedResume>>,
    reference: ReferenceData,
}

struct ReferenceData {
    countries: Vec<Country>,
    states: Vec<State>,
    education_levels: Vec<EducationLevel>,
    job_types: Vec<JobType>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData {
            countries: vec![
                Country {
                    id: 1,
                    country_name: "United States".to_string(),
                },
                Country {
                    id: 2,
                    country_name: "India".to_string(),
                },
            ],
            states: vec![
                State {
                    id: 1,
                    country_id: 1,
                    state_name: "California".to_string(),
                },
                State {
                    id: 2,
                    country_id: 1,
                    state_name: "New York".to_string(),
                },
                State {
                    id: 3,
                    country_id: 2,
                    state_name: "Karnataka".to_string(),
                },
            ],
            education_levels: vec![
                EducationLevel {
                    id: 1,
                    education_level_name: "High School".to_string(),
                },
                EducationLevel {
                    id: 2,
                    education_level_name: "Bachelor's Degree".to_string(),
                },
                EducationLevel {
                    id: 3,
                    education_level_name: "Master's Degree".to_string(),
                },
            ],
            job_types: vec![
                JobType {
                    id: 1,
                    job_type_name: "Full-time".to_string(),
                },
                JobType {
                    id: 2,
                    job_type_name: "Part-time".to_string(),
                },
                JobType {
                    id: 3,
                    job_type_name: "Contract".to_string(),
                },
            ],
        }
    }
}

fn matches_keyword(haystacks: &[&str], keyword: &Option<String>) -> bool {
    match keyword {
        None => true,
        Some(kw) => {
            let kw = kw.to_lowercase();
            haystacks.iter().any(|h| h.to_lowercase().contains(&kw))
        }
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, StoreError> {
        Ok(self.companies.read().unwrap().get(&id).cloned())
    }

    async fn get_company_by_user(&self, user_id: Uuid) -> Result<Option<Company>, StoreError> {
        Ok(self
            .companies
            .read()
            .unwrap()
            .values()
            .find(|c| c.user_id == user_id)
            .cloned())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        let mut all: Vec<_> = self.companies.read().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(all)
    }

    async fn insert_company(&self, company: &Company) -> Result<(), StoreError> {
        let mut companies = self.companies.write().unwrap();
        if companies.contains_key(&company.id) {
            return Err(StoreError::Conflict("company already exists".to_string()));
        }
        if companies.values().any(|c| c.user_id == company.user_id) {
            return Err(StoreError::Conflict("company already exists".to_string()));
        }
        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn update_company(&self, company: &Company) -> Result<(), StoreError> {
        let mut companies = self.companies.write().unwrap();
        if !companies.contains_key(&company.id) {
            return Err(StoreError::NotFound(format!(
                "Company {} not found",
                company.id
            )));
        }
        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn delete_company(&self, id: Uuid) -> Result<(), StoreError> {
        let mut companies = self.companies.write().unwrap();
        if companies.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Company {id} not found")));
        }
        let mut jobs = self.jobs.write().unwrap();
        let removed: Vec<Uuid> = jobs
            .values()
            .filter(|j| j.company_id == id)
            .map(|j| j.id)
            .collect();
        jobs.retain(|_, j| j.company_id != id);
        self.saved_jobs
            .write()
            .unwrap()
            .retain(|_, s| !removed.contains(&s.job_id));
        Ok(())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        Ok(self.jobs.read().unwrap().get(&id).cloned())
    }

    async fn list_jobs_by_company(&self, company_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        let mut jobs: Vec<_> = self
            .jobs
            .read()
            .unwrap()
            .values()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        Ok(jobs)
    }

    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<JobPosting>, StoreError> {
        let mut jobs: Vec<_> = self
            .jobs
            .read()
            .unwrap()
            .values()
            .filter(|j| j.is_active)
            .filter(|j| matches_keyword(&[&j.title, &j.description], &search.keyword))
            .filter(|j| matches_keyword(&[&j.city], &search.city))
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        jobs.truncate(search.limit.max(0) as usize);
        Ok(jobs)
    }

    async fn insert_job(&self, job: &JobPosting) -> Result<(), StoreError> {
        if !self.companies.read().unwrap().contains_key(&job.company_id) {
            return Err(StoreError::Conflict(
                "job posting references a missing row".to_string(),
            ));
        }
        let mut jobs = self.jobs.write().unwrap();
        if jobs.contains_key(&job.id) {
            return Err(StoreError::Conflict("job posting already exists".to_string()));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn update_job(&self, job: &JobPosting) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().unwrap();
        if !jobs.contains_key(&job.id) {
            return Err(StoreError::NotFound(format!("Job {} not found", job.id)));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError> {
        if self.jobs.write().unwrap().remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Job {id} not found")));
        }
        self.saved_jobs.write().unwrap().retain(|_, s| s.job_id != id);
        Ok(())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>, StoreError> {
        Ok(self.resumes.read().unwrap().get(&id).cloned())
    }

    async fn list_resumes_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        let mut resumes: Vec<_> = self
            .resumes
            .read()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        resumes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(resumes)
    }

    async fn search_resumes(&self, search: &ResumeSearch) -> Result<Vec<Resume>, StoreError> {
        let mut resumes: Vec<_> = self
            .resumes
            .read()
            .unwrap()
            .values()
            .filter(|r| matches_keyword(&[&r.title, &r.content], &search.keyword))
            .cloned()
            .collect();
        resumes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        resumes.truncate(search.limit.max(0) as usize);
        Ok(resumes)
    }

    async fn insert_resume(&self, resume: &Resume) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().unwrap();
        if resumes.contains_key(&resume.id) {
            return Err(StoreError::Conflict("resume already exists".to_string()));
        }
        resumes.insert(resume.id, resume.clone());
        Ok(())
    }

    async fn update_resume(&self, resume: &Resume) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().unwrap();
        if !resumes.contains_key(&resume.id) {
            return Err(StoreError::NotFound(format!(
                "Resume {} not found",
                resume.id
            )));
        }
        resumes.insert(resume.id, resume.clone());
        Ok(())
    }

    async fn delete_resume(&self, id: Uuid) -> Result<(), StoreError> {
        if self.resumes.write().unwrap().remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Resume {id} not found")));
        }
        self.saved_resumes
            .write()
            .unwrap()
            .retain(|_, s| s.resume_id != id);
        Ok(())
    }

    async fn insert_saved_job(&self, saved: &SavedJob) -> Result<(), StoreError> {
        if !self.jobs.read().unwrap().contains_key(&saved.job_id) {
            return Err(StoreError::Conflict(
                "saved job references a missing row".to_string(),
            ));
        }
        let mut saved_jobs = self.saved_jobs.write().unwrap();
        let key = (saved.user_id, saved.job_id);
        if saved_jobs.contains_key(&key) {
            return Err(StoreError::Conflict("saved job already exists".to_string()));
        }
        saved_jobs.insert(key, saved.clone());
        Ok(())
    }

    async fn delete_saved_job(&self, user_id: Uuid, job_id: Uuid) -> Result<(), StoreError> {
        if self
            .saved_jobs
            .write()
            .unwrap()
            .remove(&(user_id, job_id))
            .is_none()
        {
            return Err(StoreError::NotFound(format!(
                "Job {job_id} is not in user {user_id}'s favorites"
            )));
        }
        Ok(())
    }

    async fn list_saved_jobs(&self, user_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        let mut saved: Vec<SavedJob> = self
            .saved_jobs
            .read()
            .unwrap()
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        saved.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        let jobs = self.jobs.read().unwrap();
        Ok(saved
            .iter()
            .filter_map(|s| jobs.get(&s.job_id).cloned())
            .collect())
    }

    async fn insert_saved_resume(&self, saved: &SavedResume) -> Result<(), StoreError> {
        if !self.resumes.read().unwrap().contains_key(&saved.resume_id) {
            return Err(StoreError::Conflict(
                "saved resume references a missing row".to_string(),
            ));
        }
        let mut saved_resumes = self.saved_resumes.write().unwrap();
        let key = (saved.user_id, saved.resume_id);
        if saved_resumes.contains_key(&key) {
            return Err(StoreError::Conflict(
                "saved resume already exists".to_string(),
            ));
        }
        saved_resumes.insert(key, saved.clone());
        Ok(())
    }

    async fn delete_saved_resume(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
    ) -> Result<(), StoreError> {
        if self
            .saved_resumes
            .write()
            .unwrap()
            .remove(&(user_id, resume_id))
            .is_none()
        {
            return Err(StoreError::NotFound(format!(
                "Resume {resume_id} is not in user {user_id}'s favorites"
            )));
        }
        Ok(())
    }

    async fn list_saved_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        let mut saved: Vec<SavedResume> = self
            .saved_resumes
            .read()
            .unwrap()
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        saved.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        let resumes = self.resumes.read().unwrap();
        Ok(saved
            .iter()
            .filter_map(|s| resumes.get(&s.resume_id).cloned())
            .collect())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(&user.id) {
            return Err(StoreError::Conflict("user already exists".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn list_countries(&self) -> Result<Vec<Country>, StoreError> {
        Ok(self.reference.countries.clone())
    }

    async fn list_states(&self, country_id: i32) -> Result<Vec<State>, StoreError> {
        Ok(self
            .reference
            .states
            .iter()
            .filter(|s| s.country_id == country_id)
            .cloned()
            .collect())
    }

    async fn list_education_levels(&self) -> Result<Vec<EducationLevel>, StoreError> {
        Ok(self.reference.education_levels.clone())
    }

    async fn list_job_types(&self) -> Result<Vec<JobType>, StoreError> {
        Ok(self.reference.job_types.clone())
    }
}
