use std::sync::Arc;

use crate::companies::service::CompanyService;
use crate::config::Config;
use crate::favorites::service::FavoriteService;
use crate::jobs::service::JobService;
use crate::profile::provider::ProfileProvider;
use crate::resumes::service::ResumeService;
use crate::store::JobBoardStore;
use crate::users::service::UserService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind it is trait-backed, so tests run the same router over the
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobBoardStore>,
    pub profiles: Arc<dyn ProfileProvider>,
    pub companies: CompanyService,
    pub jobs: JobService,
    pub resumes: ResumeService,
    pub users: UserService,
    pub favorites: FavoriteService,
    /// Kept on the state so handlers can reach runtime settings without
    /// re-reading the environment.
    #[allow(dead_code)]
    pub config: Config,
}

impl AppState {
    pub fn new(
        store: Arc<dyn JobBoardStore>,
        profiles: Arc<dyn ProfileProvider>,
        config: Config,
    ) -> Self {
        AppState {
            companies: CompanyService::new(store.clone(), profiles.clone()),
            jobs: JobService::new(store.clone()),
            resumes: ResumeService::new(store.clone(), profiles.clone()),
            users: UserService::new(store.clone(), profiles.clone()),
            favorites: FavoriteService::new(store.clone()),
            store,
            profiles,
            config,
        }
    }
}
