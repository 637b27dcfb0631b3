//! HTTP-level integration tests for `/api/projects`.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

fn site_redesign() -> serde_json::Value {
    json!({
        "title": "Site Redesign",
        "year": 2024,
        "description": "Rebuilt the portfolio",
        "url": "https://example.com"
    })
}

async fn count_projects(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// POST /api/projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", site_redesign()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Site Redesign");
    assert_eq!(json["year"], 2024);
    assert_eq!(json["description"], "Rebuilt the portfolio");
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["content_type"], "gradient");
    assert_eq!(json["background_color"], "cyan-emerald");
    assert!(json["image_url"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_image_project(pool: PgPool) {
    let mut body = site_redesign();
    body["content_type"] = json!("image");
    body["image_url"] = json!("https://example.com/cover.jpg");
    body["background_color"] = json!("pink-indigo");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["content_type"], "image");
    assert_eq!(json["image_url"], "https://example.com/cover.jpg");
    assert!(json["background_color"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_accepts_year_as_string(pool: PgPool) {
    let mut body = site_redesign();
    body["year"] = json!("2023");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["year"], 2023);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_title_returns_400(pool: PgPool) {
    let mut body = site_redesign();
    body.as_object_mut().unwrap().remove("title");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
    assert!(json["details"]["title"].is_string());
    assert!(json["details"]["year"].is_null());
    assert!(json["details"]["description"].is_null());
    assert!(json["details"]["url"].is_null());

    assert_eq!(count_projects(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_empty_body_reports_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_FIELDS");
    for field in ["title", "year", "description", "url"] {
        assert!(
            json["details"][field].is_string(),
            "details.{field} should be set"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_invalid_background_returns_400(pool: PgPool) {
    let mut body = site_redesign();
    body["background_color"] = json!("neon");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(count_projects(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/projects", "{\"title\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_failure_returns_500_with_details(pool: PgPool) {
    sqlx::query("DROP TABLE projects")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", site_redesign()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to create project");
    assert!(json["details"].as_str().unwrap().contains("projects"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_identical_creates_are_not_merged(pool: PgPool) {
    const N: usize = 8;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..N {
        let app = common::build_test_app(pool.clone());
        tasks.spawn(async move {
            body_json(post_json(app, "/api/projects", site_redesign()).await).await
        });
    }

    let mut ids = std::collections::HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap()["id"].as_i64().unwrap());
    }
    assert_eq!(ids.len(), N);
    assert_eq!(count_projects(&pool).await, N as i64);
}

// ---------------------------------------------------------------------------
// GET /api/projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_returns_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_project_is_listed_ahead_of_older_years(pool: PgPool) {
    let mut older = site_redesign();
    older["title"] = json!("Old Blog");
    older["year"] = json!(2019);
    post_json(common::build_test_app(pool.clone()), "/api/projects", older).await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/projects",
            site_redesign(),
        )
        .await,
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], created["id"]);
    assert_eq!(arr[0], created);
    assert_eq!(arr[1]["title"], "Old Blog");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_store_failure_hides_details(pool: PgPool) {
    sqlx::query("DROP TABLE projects")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to fetch projects");
    assert!(json.get("details").is_none());
}
