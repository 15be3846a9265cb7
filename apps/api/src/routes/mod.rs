pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::companies::handlers as companies;
use crate::favorites::handlers as favorites;
use crate::forms::handlers as forms;
use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::reference::handlers as reference;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users
        .route("/api/v1/users", post(users::handle_create_user))
        .route("/api/v1/users/:id", get(users::handle_get_user))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/jobseeker",
            put(profile::handle_update_jobseeker),
        )
        .route(
            "/api/v1/profile/employer",
            put(profile::handle_update_employer),
        )
        // Companies
        .route(
            "/api/v1/companies",
            get(companies::handle_list_companies).post(companies::handle_create_company),
        )
        .route(
            "/api/v1/companies/:id",
            get(companies::handle_get_company)
                .put(companies::handle_update_company)
                .delete(companies::handle_delete_company),
        )
        .route(
            "/api/v1/companies/by-user/:user_id",
            get(companies::handle_get_company_by_user),
        )
        .route(
            "/api/v1/companies/:id/jobs",
            get(companies::handle_list_company_jobs),
        )
        // Job postings
        .route("/api/v1/jobs", post(jobs::handle_create_job))
        .route("/api/v1/jobs/search", get(jobs::handle_search_jobs))
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_create_resume),
        )
        .route("/api/v1/resumes/search", get(resumes::handle_search_resumes))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        // Saved favorites
        .route(
            "/api/v1/favorites/jobs",
            get(favorites::handle_list_saved_jobs).post(favorites::handle_save_job),
        )
        .route(
            "/api/v1/favorites/jobs/:job_id",
            delete(favorites::handle_unsave_job),
        )
        .route(
            "/api/v1/favorites/resumes",
            get(favorites::handle_list_saved_resumes).post(favorites::handle_save_resume),
        )
        .route(
            "/api/v1/favorites/resumes/:resume_id",
            delete(favorites::handle_unsave_resume),
        )
        // Reference data
        .route(
            "/api/v1/reference/countries",
            get(reference::handle_list_countries),
        )
        .route(
            "/api/v1/reference/countries/:id/states",
            get(reference::handle_list_states),
        )
        .route(
            "/api/v1/reference/education-levels",
            get(reference::handle_list_education_levels),
        )
        .route(
            "/api/v1/reference/job-types",
            get(reference::handle_list_job_types),
        )
        // Form metadata
        .route(
            "/api/v1/forms/company-profile",
            get(forms::handle_company_form),
        )
        .route("/api/v1/forms/job-posting", get(forms::handle_job_form))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::build_router;
    use crate::config::Config;
    use crate::profile::provider::MemoryProfileProvider;
    use crate::state::AppState;
    use crate::store::memory::MemoryStore;

    fn test_router() -> axum::Router {
        let state = AppState::new(
            Arc::new(MemoryStore::default()),
            Arc::new(MemoryProfileProvider::default()),
            Config::for_tests(),
        );
        build_router(state)
    }

    async fn read_json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn company_payload(user_id: Uuid) -> Value {
        json!({
            "user_id": user_id,
            "company_name": "Acme Corp",
            "brief_profile": "Roadrunner supplies",
            "address1": "1 Desert Rd",
            "address2": null,
            "city": "Tucson",
            "state_id": 1,
            "country_id": 1,
            "postal_code": "85701",
            "phone": "555-0100",
            "fax": null,
            "email": "hr@acme.test",
            "website_url": null
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = test_router().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn company_create_then_fetch_round_trips() {
        let router = test_router();
        let user = Uuid::new_v4();

        let created = router
            .clone()
            .oneshot(post("/api/v1/companies", company_payload(user)))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = read_json_body(created).await;
        let id = created["id"].as_str().unwrap().to_string();

        let fetched = router
            .clone()
            .oneshot(get(&format!("/api/v1/companies/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched = read_json_body(fetched).await;
        assert_eq!(fetched["company_name"], "Acme Corp");

        // The owner's profile now carries Employer.CompanyID.
        let profile = router
            .oneshot(get(&format!("/api/v1/profile?user_id={user}")))
            .await
            .unwrap();
        let profile = read_json_body(profile).await;
        assert_eq!(profile["employer"]["company_id"], created["id"]);
    }

    #[tokio::test]
    async fn missing_company_is_404_with_error_body() {
        let response = test_router()
            .oneshot(get(&format!("/api/v1/companies/{}", Uuid::new_v4())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_company_payload_is_400() {
        let mut payload = company_payload(Uuid::new_v4());
        payload["company_name"] = json!("");

        let response = test_router()
            .oneshot(post("/api/v1/companies", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn job_with_dangling_company_is_rejected() {
        let response = test_router()
            .oneshot(post(
                "/api/v1/jobs",
                json!({
                    "company_id": Uuid::new_v4(),
                    "posted_by": "hr",
                    "title": "Rust Engineer",
                    "description": "Build the back end",
                    "state_id": 1,
                    "country_id": 1,
                    "education_level_id": 2,
                    "job_type_id": 1,
                    "min_salary": null,
                    "max_salary": null
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_company_cascades_to_jobs() {
        let router = test_router();
        let user = Uuid::new_v4();

        let company = read_json_body(
            router
                .clone()
                .oneshot(post("/api/v1/companies", company_payload(user)))
                .await
                .unwrap(),
        )
        .await;
        let company_id = company["id"].as_str().unwrap().to_string();

        let job = read_json_body(
            router
                .clone()
                .oneshot(post(
                    "/api/v1/jobs",
                    json!({
                        "company_id": company_id,
                        "posted_by": "hr",
                        "title": "Rust Engineer",
                        "description": "Build the back end",
                        "state_id": 1,
                        "country_id": 1,
                        "education_level_id": 2,
                        "job_type_id": 1,
                        "min_salary": 90000,
                        "max_salary": 130000
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let job_id = job["id"].as_str().unwrap().to_string();

        let deleted = router
            .clone()
            .oneshot(
                Request::delete(&format!("/api/v1/companies/{company_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let job_fetch = router
            .oneshot(get(&format!("/api/v1/jobs/{job_id}")))
            .await
            .unwrap();
        assert_eq!(job_fetch.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_company_for_user_is_409() {
        let router = test_router();
        let user = Uuid::new_v4();

        let first = router
            .clone()
            .oneshot(post("/api/v1/companies", company_payload(user)))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = router
            .oneshot(post("/api/v1/companies", company_payload(user)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn job_form_metadata_carries_widget_contracts() {
        let response = test_router()
            .oneshot(get("/api/v1/forms/job-posting?country_id=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload["location"]["country_field"], "country_id");
        assert_eq!(payload["location"]["state_field"], "state_id");
        assert_eq!(payload["location"]["countries"][0]["label"], "Select Country");
        assert_eq!(
            payload["description"]["counter"]["label"],
            "0 / 2000 characters"
        );
        assert_eq!(
            payload["delete_confirm"]["message"],
            "Delete this job posting?"
        );
    }

    #[tokio::test]
    async fn reference_states_are_scoped_to_country() {
        let response = test_router()
            .oneshot(get("/api/v1/reference/countries/1/states"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        let states = payload.as_array().unwrap();
        assert!(!states.is_empty());
        assert!(states.iter().all(|s| s["country_id"] == 1));
    }

    #[tokio::test]
    async fn favorites_save_list_unsave_round_trips() {
        let router = test_router();
        let seeker = Uuid::new_v4();

        let company = read_json_body(
            router
                .clone()
                .oneshot(post("/api/v1/companies", company_payload(Uuid::new_v4())))
                .await
                .unwrap(),
        )
        .await;
        let job = read_json_body(
            router
                .clone()
                .oneshot(post(
                    "/api/v1/jobs",
                    json!({
                        "company_id": company["id"],
                        "posted_by": "hr",
                        "title": "Rust Engineer",
                        "description": "Build the back end",
                        "state_id": 1,
                        "country_id": 1,
                        "education_level_id": 2,
                        "job_type_id": 1,
                        "min_salary": null,
                        "max_salary": null
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;

        let save = json!({ "user_id": seeker, "job_id": job["id"] });
        let saved = router
            .clone()
            .oneshot(post("/api/v1/favorites/jobs", save.clone()))
            .await
            .unwrap();
        assert_eq!(saved.status(), StatusCode::CREATED);

        // Saving the same posting again conflicts.
        let again = router
            .clone()
            .oneshot(post("/api/v1/favorites/jobs", save))
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::CONFLICT);

        let listed = read_json_body(
            router
                .clone()
                .oneshot(get(&format!("/api/v1/favorites/jobs?user_id={seeker}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], job["id"]);

        let job_id = job["id"].as_str().unwrap();
        let removed = router
            .clone()
            .oneshot(
                Request::delete(&format!(
                    "/api/v1/favorites/jobs/{job_id}?user_id={seeker}"
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(removed.status(), StatusCode::NO_CONTENT);

        let empty = read_json_body(
            router
                .oneshot(get(&format!("/api/v1/favorites/jobs?user_id={seeker}")))
                .await
                .unwrap(),
        )
        .await;
        assert!(empty.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_registration_seeds_profile() {
        let router = test_router();

        let user = read_json_body(
            router
                .clone()
                .oneshot(post(
                    "/api/v1/users",
                    json!({
                        "user_name": "jdoe",
                        "email": "jdoe@example.com",
                        "first_name": "Jane",
                        "last_name": "Doe",
                        "picture_url": null
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let user_id = user["id"].as_str().unwrap();

        let profile = read_json_body(
            router
                .oneshot(get(&format!("/api/v1/profile?user_id={user_id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(profile["user_name"], "jdoe");
        assert_eq!(profile["first_name"], "Jane");
    }
}
