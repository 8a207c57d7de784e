//! End-to-end tests for the listing API over the seeded in-memory store

use anyhow::anyhow;
use async_trait::async_trait;
use axum_test::TestServer;
use company_directory::core::company::CompanyRecord;
use company_directory::core::filter::CompanyQuery;
use company_directory::core::service::{CompanyStore, ListingService};
use company_directory::seed::seed;
use company_directory::server::{build_router, AppState};
use company_directory::storage::InMemoryCompanyStore;
use serde_json::Value;
use std::sync::Arc;

async fn seeded_server() -> TestServer {
    let store = Arc::new(InMemoryCompanyStore::new());
    seed(store.as_ref()).await.expect("seeding should succeed");

    let state = AppState::new(ListingService::new(store));
    TestServer::new(build_router(state))
}

fn names(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect()
}

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_unfiltered_listing_returns_all_sorted_by_name() {
        let server = seeded_server().await;

        let response = server.get("/api/companies").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 15);

        let listed = names(&body);
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }

    #[tokio::test]
    async fn test_search_matches_name_or_description() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("search", "Analytics")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        // "Analytics" appears only in Northwind's name and description.
        assert_eq!(body["count"], 1);
        assert_eq!(names(&body), vec!["Northwind Analytics"]);
    }

    #[tokio::test]
    async fn test_industry_filter_is_exact() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("industry", "Climate Tech")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 2);
        assert_eq!(names(&body), vec!["Evergreen Labs", "Green Energy Solutions"]);
    }

    #[tokio::test]
    async fn test_size_all_applies_no_constraint() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("size", "all")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 15);
    }

    #[tokio::test]
    async fn test_id_lookup_ignores_other_parameters() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("id", "cmp001")
            .add_query_param("name", "ignored")
            .add_query_param("industry", "Design")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["id"], "cmp001");
        assert_eq!(body["data"][0]["name"], "Northwind Analytics");
    }

    #[tokio::test]
    async fn test_name_filter_is_case_insensitive_exact() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("name", "atlas pay")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "Atlas Pay");
    }

    #[tokio::test]
    async fn test_combined_filters_intersect() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("location", "San Francisco, USA")
            .add_query_param("industry", "Design")
            .add_query_param("size", "0-50")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 2);
        assert_eq!(names(&body), vec!["Lumen Studio", "Swamy Studio"]);
    }

    #[tokio::test]
    async fn test_no_match_returns_empty_success() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("search", "zzz-no-such-company")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_parameters_are_ignored() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("sort", "name:desc")
            .add_query_param("page", "3")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 15);
    }

    #[tokio::test]
    async fn test_blank_parameters_are_treated_as_absent() {
        let server = seeded_server().await;

        let response = server
            .get("/api/companies")
            .add_query_param("id", "  ")
            .add_query_param("search", "")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 15);
    }
}

mod failure_tests {
    use super::*;

    struct BrokenStore;

    #[async_trait]
    impl CompanyStore for BrokenStore {
        async fn find(&self, _query: &CompanyQuery) -> anyhow::Result<Vec<CompanyRecord>> {
            Err(anyhow!("collection unavailable"))
        }

        async fn list_all(&self) -> anyhow::Result<Vec<CompanyRecord>> {
            Err(anyhow!("collection unavailable"))
        }

        async fn replace_all(&self, _records: Vec<CompanyRecord>) -> anyhow::Result<usize> {
            Err(anyhow!("collection unavailable"))
        }
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_fixed_500_body() {
        let state = AppState::new(ListingService::new(Arc::new(BrokenStore)));
        let server = TestServer::new(build_router(state));

        let response = server.get("/api/companies").await;
        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Internal Server Error");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("collection unavailable"));
    }
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = seeded_server().await;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
