//! Registration lifecycle storage
//!
//! Registrations are created by the public enrollment flow, listed by the
//! dashboard with their course title, and mutated only through the status
//! transition. Nothing here deletes a registration.

use sqlx::{Row, SqlitePool};
use std::str::FromStr;

use surplus_types::prelude::*;
use surplus_types::store_adapter::{CreateRegistration, RegistrationStatus, RegistrationView};

use crate::utils::{inspect, require_affected};

/// Insert a new registration with status forced to `pending` and the
/// creation timestamp assigned by the database
pub(crate) async fn create(db: &SqlitePool, reg: CreateRegistration) -> SpResult<i64> {
	if reg.full_name.trim().is_empty() {
		return Err(Error::ValidationError("full_name is required".into()));
	}
	if reg.email.trim().is_empty() {
		return Err(Error::ValidationError("email is required".into()));
	}

	let row = sqlx::query(
		"INSERT INTO registrations (course_id, full_name, email, phone) VALUES (?, ?, ?, ?) RETURNING id",
	)
	.bind(reg.course_id)
	.bind(&reg.full_name)
	.bind(&reg.email)
	.bind(&reg.phone)
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(row.get(0))
}

/// List every registration, most recent first, joined with its course
/// title. A deleted course leaves the title NULL (left-join semantics).
/// Timestamps have second resolution, so ties break by reverse id order.
pub(crate) async fn list(db: &SqlitePool) -> SpResult<Vec<RegistrationView>> {
	let rows = sqlx::query(
		"SELECT r.id, r.course_id, r.full_name, r.email, r.phone, r.status, r.created_at,
			c.title AS course_title
		FROM registrations r
		LEFT JOIN courses c ON r.course_id = c.id
		ORDER BY r.created_at DESC, r.id DESC",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut registrations = Vec::with_capacity(rows.len());
	for row in rows {
		let status: String = row.try_get("status").map_err(|_| Error::DbError)?;
		registrations.push(RegistrationView {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			course_id: row.try_get("course_id").map_err(|_| Error::DbError)?,
			full_name: row.try_get("full_name").map_err(|_| Error::DbError)?,
			email: row.try_get("email").map_err(|_| Error::DbError)?,
			phone: row.try_get("phone").map_err(|_| Error::DbError)?,
			status: RegistrationStatus::from_str(&status).map_err(|_| Error::DbError)?,
			created_at: Timestamp(row.try_get("created_at").map_err(|_| Error::DbError)?),
			course_title: row.try_get("course_title").map_err(|_| Error::DbError)?,
		});
	}

	Ok(registrations)
}

/// Overwrite the status of one registration. Last writer wins; updating a
/// record to its current status is a valid no-op. An id that matches no
/// row is `NotFound` rather than silent success.
pub(crate) async fn update_status(
	db: &SqlitePool,
	reg_id: i64,
	status: RegistrationStatus,
) -> SpResult<()> {
	let res = sqlx::query("UPDATE registrations SET status = ? WHERE id = ?")
		.bind(status.as_str())
		.bind(reg_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	require_affected(res)
}

// vim: ts=4
