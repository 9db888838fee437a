//! Store adapter trait and its data types.
//!
//! The server never talks to the database directly; it is handed an
//! `Arc<dyn StoreAdapter>` at construction time, opened at startup and
//! dropped at shutdown. All records are flat; the only relationship is the
//! soft `course_id` reference on registrations, resolved with left-join
//! semantics when listing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Debug};

use crate::error::{Error, SpResult};
use crate::types::Timestamp;

// Registrations //
//***************//

/// Registration approval state. Closed set: free status text is rejected
/// at the boundary instead of being persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
	Pending,
	Approved,
	Rejected,
}

impl RegistrationStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			RegistrationStatus::Pending => "pending",
			RegistrationStatus::Approved => "approved",
			RegistrationStatus::Rejected => "rejected",
		}
	}
}

impl std::str::FromStr for RegistrationStatus {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pending" => Ok(RegistrationStatus::Pending),
			"approved" => Ok(RegistrationStatus::Approved),
			"rejected" => Ok(RegistrationStatus::Rejected),
			_ => Err(Error::ValidationError(format!("invalid registration status: {}", s))),
		}
	}
}

impl std::fmt::Display for RegistrationStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Data for creating a registration. Status and creation time are not
/// caller-controlled: new records are always `pending` and stamped by the
/// store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegistration {
	pub course_id: Option<i64>,
	pub full_name: String,
	pub email: String,
	pub phone: Option<String>,
}

/// Registration row joined with the referenced course title, if the course
/// still exists (a dangling `course_id` is not an error).
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
	pub id: i64,
	pub course_id: Option<i64>,
	pub full_name: String,
	pub email: String,
	pub phone: Option<String>,
	pub status: RegistrationStatus,
	pub created_at: Timestamp,
	pub course_title: Option<String>,
}

// Catalog //
//*********//

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
	pub name: String,
	pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseData {
	pub title: String,
	pub description: Option<String>,
	pub duration: Option<String>,
	pub price: Option<f64>,
	/// Denormalized category name, not a foreign key; renaming a category
	/// does not cascade here
	pub category: Option<String>,
	pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub duration: Option<String>,
	pub price: Option<f64>,
	pub category: Option<String>,
	pub image_url: Option<String>,
}

// Content //
//*********//

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberData {
	pub name: String,
	pub role: Option<String>,
	pub bio: Option<String>,
	pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
	pub id: i64,
	pub name: String,
	pub role: Option<String>,
	pub bio: Option<String>,
	pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceData {
	pub title: String,
	pub description: Option<String>,
	pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialData {
	pub client_name: String,
	pub content: String,
	pub rating: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
	pub id: i64,
	pub client_name: String,
	pub content: String,
	pub rating: Option<i64>,
}

// Stats //
//*******//

/// Dashboard counters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
	pub total_courses: i64,
	pub total_registrations: i64,
	pub pending_registrations: i64,
	pub team_members: i64,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Registrations
	///
	/// Persists a new registration with status forced to `pending`.
	/// Fails with `ValidationError` when `full_name` or `email` is empty.
	/// `course_id` is not checked against the courses table.
	async fn create_registration(&self, reg: CreateRegistration) -> SpResult<i64>;
	/// Full snapshot, most recent first; ties on `created_at` break by
	/// reverse insertion order
	async fn list_registrations(&self) -> SpResult<Vec<RegistrationView>>;
	/// Unconditional overwrite; any transition is allowed, including
	/// re-application. Fails with `NotFound` when the id matches no row.
	async fn update_registration_status(
		&self,
		reg_id: i64,
		status: RegistrationStatus,
	) -> SpResult<()>;

	/// # Settings
	async fn list_settings(&self) -> SpResult<HashMap<String, String>>;
	async fn read_setting(&self, key: &str) -> SpResult<Option<String>>;
	/// Atomic multi-key upsert; keys absent from `updates` are untouched
	async fn update_settings(&self, updates: &HashMap<String, String>) -> SpResult<()>;
	/// Inserts `defaults` if and only if the store holds zero keys.
	/// Returns whether seeding happened.
	async fn seed_settings(&self, defaults: &[(&str, &str)]) -> SpResult<bool>;

	/// # Categories
	async fn list_categories(&self) -> SpResult<Vec<Category>>;
	async fn create_category(&self, data: CreateCategory) -> SpResult<i64>;
	async fn update_category(&self, cat_id: i64, data: CreateCategory) -> SpResult<()>;
	async fn delete_category(&self, cat_id: i64) -> SpResult<()>;

	/// # Courses
	async fn list_courses(&self) -> SpResult<Vec<Course>>;
	async fn create_course(&self, data: CourseData) -> SpResult<i64>;
	async fn update_course(&self, course_id: i64, data: CourseData) -> SpResult<()>;
	async fn delete_course(&self, course_id: i64) -> SpResult<()>;

	/// # Team members
	async fn list_team(&self) -> SpResult<Vec<TeamMember>>;
	async fn create_team_member(&self, data: TeamMemberData) -> SpResult<i64>;
	async fn update_team_member(&self, member_id: i64, data: TeamMemberData) -> SpResult<()>;
	async fn delete_team_member(&self, member_id: i64) -> SpResult<()>;

	/// # Services
	async fn list_services(&self) -> SpResult<Vec<Service>>;
	async fn create_service(&self, data: ServiceData) -> SpResult<i64>;
	async fn update_service(&self, service_id: i64, data: ServiceData) -> SpResult<()>;
	async fn delete_service(&self, service_id: i64) -> SpResult<()>;

	/// # Testimonials
	async fn list_testimonials(&self) -> SpResult<Vec<Testimonial>>;
	async fn create_testimonial(&self, data: TestimonialData) -> SpResult<i64>;
	async fn update_testimonial(&self, testimonial_id: i64, data: TestimonialData) -> SpResult<()>;
	async fn delete_testimonial(&self, testimonial_id: i64) -> SpResult<()>;

	/// # Stats
	async fn read_stats(&self) -> SpResult<Stats>;
}


// vim: ts=4
