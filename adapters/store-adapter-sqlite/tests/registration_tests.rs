//! Registration store tests
//!
//! Covers the creation/transition lifecycle, ordering, validation, and the
//! left-join course title semantics.

use surplus_store_adapter_sqlite::StoreAdapterSqlite;
use surplus_types::Error;
use surplus_types::store_adapter::{
	CourseData, CreateRegistration, RegistrationStatus, StoreAdapter,
};
use tempfile::TempDir;

async fn create_test_adapter() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = StoreAdapterSqlite::new(temp_dir.path().join("surplus.db"))
		.await
		.expect("Failed to create adapter");
	(adapter, temp_dir)
}

fn registration(full_name: &str, email: &str) -> CreateRegistration {
	CreateRegistration {
		course_id: None,
		full_name: full_name.into(),
		email: email.into(),
		phone: None,
	}
}

#[tokio::test]
async fn test_create_starts_pending() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter
		.create_registration(registration("Jane Doe", "jane@x.com"))
		.await
		.expect("Should create registration");
	assert_eq!(id, 1);

	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs.len(), 1);
	assert_eq!(regs[0].id, 1);
	assert_eq!(regs[0].status, RegistrationStatus::Pending);
	assert_eq!(regs[0].course_id, None);
	assert_eq!(regs[0].course_title, None);
}

#[tokio::test]
async fn test_create_rejects_empty_fields() {
	let (adapter, _temp) = create_test_adapter().await;

	let res = adapter.create_registration(registration("", "jane@x.com")).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let res = adapter.create_registration(registration("   ", "jane@x.com")).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let res = adapter.create_registration(registration("Jane Doe", "")).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	// Nothing was persisted
	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert!(regs.is_empty());
}

#[tokio::test]
async fn test_list_orders_most_recent_first() {
	let (adapter, _temp) = create_test_adapter().await;

	for i in 1..=3 {
		adapter
			.create_registration(registration(&format!("Student {}", i), "student@x.com"))
			.await
			.expect("Should create registration");
	}

	// All three inserts land within the same second, so the ordering falls
	// back to reverse insertion order
	let regs = adapter.list_registrations().await.expect("Should list registrations");
	let ids: Vec<i64> = regs.iter().map(|r| r.id).collect();
	assert_eq!(ids, vec![3, 2, 1]);

	for pair in regs.windows(2) {
		assert!(pair[0].created_at >= pair[1].created_at);
	}
}

#[tokio::test]
async fn test_transition_last_write_wins() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter
		.create_registration(registration("Jane Doe", "jane@x.com"))
		.await
		.expect("Should create registration");

	adapter
		.update_registration_status(id, RegistrationStatus::Approved)
		.await
		.expect("Should approve");
	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs[0].status, RegistrationStatus::Approved);

	// Re-applying the same status is a valid no-op
	adapter
		.update_registration_status(id, RegistrationStatus::Approved)
		.await
		.expect("Should re-approve");

	// Backward transitions are permitted; the store enforces no terminal state
	adapter
		.update_registration_status(id, RegistrationStatus::Pending)
		.await
		.expect("Should move back to pending");
	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs[0].status, RegistrationStatus::Pending);
}

#[tokio::test]
async fn test_transition_unknown_id_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;

	let res = adapter.update_registration_status(999, RegistrationStatus::Approved).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_course_title_joined_and_degrades_on_delete() {
	let (adapter, _temp) = create_test_adapter().await;

	let course_id = adapter
		.create_course(CourseData {
			title: "Rust Basics".into(),
			description: None,
			duration: Some("6 weeks".into()),
			price: Some(199.0),
			category: None,
			image_url: None,
		})
		.await
		.expect("Should create course");

	let reg = CreateRegistration {
		course_id: Some(course_id),
		full_name: "Jane Doe".into(),
		email: "jane@x.com".into(),
		phone: Some("+1 234".into()),
	};
	adapter.create_registration(reg).await.expect("Should create registration");

	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs[0].course_title.as_deref(), Some("Rust Basics"));

	// Deleting the course leaves a dangling reference, not an error
	adapter.delete_course(course_id).await.expect("Should delete course");
	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs[0].course_id, Some(course_id));
	assert_eq!(regs[0].course_title, None);
}

#[tokio::test]
async fn test_dangling_course_reference_accepted_at_create() {
	let (adapter, _temp) = create_test_adapter().await;

	// No referential check at write time
	let reg = CreateRegistration {
		course_id: Some(12345),
		full_name: "Jane Doe".into(),
		email: "jane@x.com".into(),
		phone: None,
	};
	adapter.create_registration(reg).await.expect("Should create registration");

	let regs = adapter.list_registrations().await.expect("Should list registrations");
	assert_eq!(regs[0].course_id, Some(12345));
	assert_eq!(regs[0].course_title, None);
}

// vim: ts=4
