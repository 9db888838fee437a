//! Team member, service, and testimonial storage
//!
//! Flat records shown on the public site and edited from the dashboard.

use sqlx::{Row, SqlitePool};

use surplus_types::prelude::*;
use surplus_types::store_adapter::{
	Service, ServiceData, TeamMember, TeamMemberData, Testimonial, TestimonialData,
};

use crate::utils::{inspect, require_affected};

// Team members
//**************
pub(crate) async fn list_team(db: &SqlitePool) -> SpResult<Vec<TeamMember>> {
	let rows = sqlx::query("SELECT id, name, role, bio, image_url FROM team")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut team = Vec::with_capacity(rows.len());
	for row in rows {
		team.push(TeamMember {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			name: row.try_get("name").map_err(|_| Error::DbError)?,
			role: row.try_get("role").map_err(|_| Error::DbError)?,
			bio: row.try_get("bio").map_err(|_| Error::DbError)?,
			image_url: row.try_get("image_url").map_err(|_| Error::DbError)?,
		});
	}

	Ok(team)
}

pub(crate) async fn create_team_member(db: &SqlitePool, data: TeamMemberData) -> SpResult<i64> {
	let row =
		sqlx::query("INSERT INTO team (name, role, bio, image_url) VALUES (?, ?, ?, ?) RETURNING id")
			.bind(&data.name)
			.bind(&data.role)
			.bind(&data.bio)
			.bind(&data.image_url)
			.fetch_one(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

	Ok(row.get(0))
}

pub(crate) async fn update_team_member(
	db: &SqlitePool,
	member_id: i64,
	data: TeamMemberData,
) -> SpResult<()> {
	let res = sqlx::query("UPDATE team SET name = ?, role = ?, bio = ?, image_url = ? WHERE id = ?")
		.bind(&data.name)
		.bind(&data.role)
		.bind(&data.bio)
		.bind(&data.image_url)
		.bind(member_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res)
}

pub(crate) async fn delete_team_member(db: &SqlitePool, member_id: i64) -> SpResult<()> {
	sqlx::query("DELETE FROM team WHERE id = ?")
		.bind(member_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// Services
//**********
pub(crate) async fn list_services(db: &SqlitePool) -> SpResult<Vec<Service>> {
	let rows = sqlx::query("SELECT id, title, description, icon FROM services")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut services = Vec::with_capacity(rows.len());
	for row in rows {
		services.push(Service {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			title: row.try_get("title").map_err(|_| Error::DbError)?,
			description: row.try_get("description").map_err(|_| Error::DbError)?,
			icon: row.try_get("icon").map_err(|_| Error::DbError)?,
		});
	}

	Ok(services)
}

pub(crate) async fn create_service(db: &SqlitePool, data: ServiceData) -> SpResult<i64> {
	let row = sqlx::query(
		"INSERT INTO services (title, description, icon) VALUES (?, ?, ?) RETURNING id",
	)
	.bind(&data.title)
	.bind(&data.description)
	.bind(&data.icon)
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(row.get(0))
}

pub(crate) async fn update_service(
	db: &SqlitePool,
	service_id: i64,
	data: ServiceData,
) -> SpResult<()> {
	let res = sqlx::query("UPDATE services SET title = ?, description = ?, icon = ? WHERE id = ?")
		.bind(&data.title)
		.bind(&data.description)
		.bind(&data.icon)
		.bind(service_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res)
}

pub(crate) async fn delete_service(db: &SqlitePool, service_id: i64) -> SpResult<()> {
	sqlx::query("DELETE FROM services WHERE id = ?")
		.bind(service_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// Testimonials
//**************
pub(crate) async fn list_testimonials(db: &SqlitePool) -> SpResult<Vec<Testimonial>> {
	let rows = sqlx::query("SELECT id, client_name, content, rating FROM testimonials")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut testimonials = Vec::with_capacity(rows.len());
	for row in rows {
		testimonials.push(Testimonial {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			client_name: row.try_get("client_name").map_err(|_| Error::DbError)?,
			content: row.try_get("content").map_err(|_| Error::DbError)?,
			rating: row.try_get("rating").map_err(|_| Error::DbError)?,
		});
	}

	Ok(testimonials)
}

pub(crate) async fn create_testimonial(db: &SqlitePool, data: TestimonialData) -> SpResult<i64> {
	let row = sqlx::query(
		"INSERT INTO testimonials (client_name, content, rating) VALUES (?, ?, ?) RETURNING id",
	)
	.bind(&data.client_name)
	.bind(&data.content)
	.bind(data.rating)
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(row.get(0))
}

pub(crate) async fn update_testimonial(
	db: &SqlitePool,
	testimonial_id: i64,
	data: TestimonialData,
) -> SpResult<()> {
	let res = sqlx::query(
		"UPDATE testimonials SET client_name = ?, content = ?, rating = ? WHERE id = ?",
	)
	.bind(&data.client_name)
	.bind(&data.content)
	.bind(data.rating)
	.bind(testimonial_id)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	require_affected(res)
}

pub(crate) async fn delete_testimonial(db: &SqlitePool, testimonial_id: i64) -> SpResult<()> {
	sqlx::query("DELETE FROM testimonials WHERE id = ?")
		.bind(testimonial_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
