//! SQLite implementation of the Surplus store adapter.
//!
//! One database file holds every table; the pool is opened at startup with
//! WAL journaling and shared by all requests. Domain logic lives in the
//! per-domain modules, this file only wires them into the trait.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::{collections::HashMap, path::Path};

use surplus_types::prelude::*;
use surplus_types::store_adapter::{
	Category, Course, CourseData, CreateCategory, CreateRegistration, RegistrationStatus,
	RegistrationView, Service, ServiceData, Stats, StoreAdapter, TeamMember, TeamMemberData,
	Testimonial, TestimonialData,
};

mod catalog;
mod content;
mod registration;
mod schema;
mod setting;
mod stats;
mod utils;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> SpResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Registrations
	//***************
	async fn create_registration(&self, reg: CreateRegistration) -> SpResult<i64> {
		registration::create(&self.db, reg).await
	}

	async fn list_registrations(&self) -> SpResult<Vec<RegistrationView>> {
		registration::list(&self.db).await
	}

	async fn update_registration_status(
		&self,
		reg_id: i64,
		status: RegistrationStatus,
	) -> SpResult<()> {
		registration::update_status(&self.db, reg_id, status).await
	}

	// Settings
	//**********
	async fn list_settings(&self) -> SpResult<HashMap<String, String>> {
		setting::list(&self.db).await
	}

	async fn read_setting(&self, key: &str) -> SpResult<Option<String>> {
		setting::read(&self.db, key).await
	}

	async fn update_settings(&self, updates: &HashMap<String, String>) -> SpResult<()> {
		setting::update(&self.db, updates).await
	}

	async fn seed_settings(&self, defaults: &[(&str, &str)]) -> SpResult<bool> {
		setting::seed(&self.db, defaults).await
	}

	// Categories
	//************
	async fn list_categories(&self) -> SpResult<Vec<Category>> {
		catalog::list_categories(&self.db).await
	}

	async fn create_category(&self, data: CreateCategory) -> SpResult<i64> {
		catalog::create_category(&self.db, data).await
	}

	async fn update_category(&self, cat_id: i64, data: CreateCategory) -> SpResult<()> {
		catalog::update_category(&self.db, cat_id, data).await
	}

	async fn delete_category(&self, cat_id: i64) -> SpResult<()> {
		catalog::delete_category(&self.db, cat_id).await
	}

	// Courses
	//*********
	async fn list_courses(&self) -> SpResult<Vec<Course>> {
		catalog::list_courses(&self.db).await
	}

	async fn create_course(&self, data: CourseData) -> SpResult<i64> {
		catalog::create_course(&self.db, data).await
	}

	async fn update_course(&self, course_id: i64, data: CourseData) -> SpResult<()> {
		catalog::update_course(&self.db, course_id, data).await
	}

	async fn delete_course(&self, course_id: i64) -> SpResult<()> {
		catalog::delete_course(&self.db, course_id).await
	}

	// Team members
	//**************
	async fn list_team(&self) -> SpResult<Vec<TeamMember>> {
		content::list_team(&self.db).await
	}

	async fn create_team_member(&self, data: TeamMemberData) -> SpResult<i64> {
		content::create_team_member(&self.db, data).await
	}

	async fn update_team_member(&self, member_id: i64, data: TeamMemberData) -> SpResult<()> {
		content::update_team_member(&self.db, member_id, data).await
	}

	async fn delete_team_member(&self, member_id: i64) -> SpResult<()> {
		content::delete_team_member(&self.db, member_id).await
	}

	// Services
	//**********
	async fn list_services(&self) -> SpResult<Vec<Service>> {
		content::list_services(&self.db).await
	}

	async fn create_service(&self, data: ServiceData) -> SpResult<i64> {
		content::create_service(&self.db, data).await
	}

	async fn update_service(&self, service_id: i64, data: ServiceData) -> SpResult<()> {
		content::update_service(&self.db, service_id, data).await
	}

	async fn delete_service(&self, service_id: i64) -> SpResult<()> {
		content::delete_service(&self.db, service_id).await
	}

	// Testimonials
	//**************
	async fn list_testimonials(&self) -> SpResult<Vec<Testimonial>> {
		content::list_testimonials(&self.db).await
	}

	async fn create_testimonial(&self, data: TestimonialData) -> SpResult<i64> {
		content::create_testimonial(&self.db, data).await
	}

	async fn update_testimonial(&self, testimonial_id: i64, data: TestimonialData) -> SpResult<()> {
		content::update_testimonial(&self.db, testimonial_id, data).await
	}

	async fn delete_testimonial(&self, testimonial_id: i64) -> SpResult<()> {
		content::delete_testimonial(&self.db, testimonial_id).await
	}

	// Stats
	//*******
	async fn read_stats(&self) -> SpResult<Stats> {
		stats::read(&self.db).await
	}
}

// vim: ts=4
