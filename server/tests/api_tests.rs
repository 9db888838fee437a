//! End-to-end API tests running the router against a real SQLite store

use std::{collections::HashMap, sync::Arc};

use axum::{
	Router,
	body::Body,
	http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use surplus::{AppBuilder, bootstrap, routes};
use surplus_store_adapter_sqlite::StoreAdapterSqlite;

/// Boots a fresh app on a throwaway database, seeded defaults included.
/// The TempDir must outlive the router.
async fn create_test_app() -> (Router, TempDir) {
	let dir = TempDir::new().unwrap();
	let adapter = StoreAdapterSqlite::new(dir.path().join("surplus.db")).await.unwrap();

	let mut builder = AppBuilder::new();
	builder.dist_dir(dir.path()).store_adapter(Arc::new(adapter));
	let app = builder.build().unwrap();

	bootstrap::init(&app).await.unwrap();

	(routes::init(app), dir)
}

fn get(path: &str) -> Request<Body> {
	Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn json_req(method: &str, path: &str, body: Value) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(path)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_settings_seeded_on_fresh_database() {
	let (router, _dir) = create_test_app().await;

	let response = router.oneshot(get("/api/settings")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let settings: HashMap<String, String> = serde_json::from_value(body_json(response).await).unwrap();
	assert_eq!(settings.len(), 6);
	assert_eq!(settings.get("site_name").map(String::as_str), Some("Surplus Consultancy"));
	assert_eq!(settings.get("contact_email").map(String::as_str), Some("info@surplus.com"));
}

#[tokio::test]
async fn test_settings_bulk_update() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/settings",
			json!({ "site_name": "Acme", "banner_enabled": true }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({ "success": true }));

	let response = router.oneshot(get("/api/settings")).await.unwrap();
	let settings: HashMap<String, String> = serde_json::from_value(body_json(response).await).unwrap();

	// Submitted keys are replaced or created, non-string values stored as
	// their JSON text, untouched keys keep their seeded values
	assert_eq!(settings.get("site_name").map(String::as_str), Some("Acme"));
	assert_eq!(settings.get("banner_enabled").map(String::as_str), Some("true"));
	assert_eq!(settings.get("contact_email").map(String::as_str), Some("info@surplus.com"));
}

#[tokio::test]
async fn test_registration_lifecycle() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/registrations",
			json!({ "full_name": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0101" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let created = body_json(response).await;
	let reg_id = created["id"].as_i64().unwrap();
	assert!(reg_id > 0);

	let response = router.clone().oneshot(get("/api/registrations")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let list = body_json(response).await;
	assert_eq!(list.as_array().unwrap().len(), 1);
	assert_eq!(list[0]["status"], "pending");
	assert_eq!(list[0]["full_name"], "Ada Lovelace");

	let response = router
		.clone()
		.oneshot(json_req(
			"PATCH",
			&format!("/api/registrations/{reg_id}"),
			json!({ "status": "approved" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({ "success": true }));

	let response = router.oneshot(get("/api/registrations")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list[0]["status"], "approved");
}

#[tokio::test]
async fn test_registration_rejects_blank_fields() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.oneshot(json_req(
			"POST",
			"/api/registrations",
			json!({ "full_name": "   ", "email": "ada@example.com" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_registration_update_unknown_id() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.oneshot(json_req("PATCH", "/api/registrations/999", json!({ "status": "approved" })))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_registration_update_rejects_unknown_status() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/registrations",
			json!({ "full_name": "Ada Lovelace", "email": "ada@example.com" }),
		))
		.await
		.unwrap();
	let reg_id = body_json(response).await["id"].as_i64().unwrap();

	// Free-text status never reaches the store; deserialization into the
	// closed enum fails first
	let response = router
		.clone()
		.oneshot(json_req(
			"PATCH",
			&format!("/api/registrations/{reg_id}"),
			json!({ "status": "archived" }),
		))
		.await
		.unwrap();
	assert!(response.status().is_client_error());

	let response = router.oneshot(get("/api/registrations")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list[0]["status"], "pending");
}

#[tokio::test]
async fn test_course_crud_and_registration_join() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/courses",
			json!({
				"title": "Systems Programming",
				"description": "From bits to processes",
				"category": "Engineering",
				"price": 499.0,
				"duration": "8 weeks"
			}),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let course_id = body_json(response).await["id"].as_i64().unwrap();

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/registrations",
			json!({ "course_id": course_id, "full_name": "Ada Lovelace", "email": "ada@example.com" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router.clone().oneshot(get("/api/registrations")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list[0]["course_title"], "Systems Programming");

	// Deleting the course leaves the registration with no title
	let response = router
		.clone()
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri(format!("/api/courses/{course_id}"))
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router.oneshot(get("/api/registrations")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list[0]["course_title"], Value::Null);
}

#[tokio::test]
async fn test_duplicate_category_is_rejected() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req("POST", "/api/categories", json!({ "name": "Finance" })))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router
		.oneshot(json_req("POST", "/api/categories", json!({ "name": "Finance" })))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_reflect_row_counts() {
	let (router, _dir) = create_test_app().await;

	for name in ["Ada", "Grace"] {
		let response = router
			.clone()
			.oneshot(json_req(
				"POST",
				"/api/registrations",
				json!({ "full_name": name, "email": format!("{name}@example.com") }),
			))
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	let response = router
		.clone()
		.oneshot(json_req("PATCH", "/api/registrations/1", json!({ "status": "rejected" })))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router.oneshot(get("/api/stats")).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let stats = body_json(response).await;
	assert_eq!(stats["totalRegistrations"], 2);
	assert_eq!(stats["pendingRegistrations"], 1);
	assert_eq!(stats["totalCourses"], 0);
	assert_eq!(stats["teamMembers"], 0);
}

#[tokio::test]
async fn test_team_crud() {
	let (router, _dir) = create_test_app().await;

	let response = router
		.clone()
		.oneshot(json_req(
			"POST",
			"/api/team",
			json!({ "name": "Grace Hopper", "role": "Principal Consultant" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let member_id = body_json(response).await["id"].as_i64().unwrap();

	let response = router
		.clone()
		.oneshot(json_req(
			"PUT",
			&format!("/api/team/{member_id}"),
			json!({ "name": "Grace Hopper", "role": "Director" }),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router.clone().oneshot(get("/api/team")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list[0]["role"], "Director");

	let response = router
		.clone()
		.oneshot(
			Request::builder()
				.method("DELETE")
				.uri(format!("/api/team/{member_id}"))
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router.oneshot(get("/api/team")).await.unwrap();
	let list = body_json(response).await;
	assert_eq!(list.as_array().unwrap().len(), 0);
}

// vim: ts=4
