//! Registration handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::prelude::*;
use crate::types::{CreatedResponse, SuccessResponse};
use surplus_types::store_adapter::{CreateRegistration, RegistrationStatus, RegistrationView};

/// GET /api/registrations - List every registration with its course title,
/// most recent first
pub async fn list_registrations(
	State(app): State<App>,
) -> SpResult<(StatusCode, Json<Vec<RegistrationView>>)> {
	let registrations = app.store_adapter.list_registrations().await?;

	Ok((StatusCode::OK, Json(registrations)))
}

/// POST /api/registrations - Entry point of the public enrollment form.
/// The record always starts out `pending`; any status the caller supplies
/// is ignored (the field does not exist on the request type).
pub async fn create_registration(
	State(app): State<App>,
	Json(req): Json<CreateRegistration>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(
		course_id = ?req.course_id,
		email = %req.email,
		"POST /api/registrations - New registration"
	);

	let id = app.store_adapter.create_registration(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PATCH /api/registrations/:id - Status transition
///
/// Any of the three statuses may be set at any time; there is no terminal
/// state. Unknown status text never reaches the store, it is rejected when
/// the body fails to deserialize into the closed enum.
#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationRequest {
	pub status: RegistrationStatus,
}

pub async fn update_registration(
	State(app): State<App>,
	Path(reg_id): Path<i64>,
	Json(req): Json<UpdateRegistrationRequest>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(
		reg_id = %reg_id,
		status = %req.status,
		"PATCH /api/registrations/:id - Status transition"
	);

	app.store_adapter.update_registration_status(reg_id, req.status).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// vim: ts=4
