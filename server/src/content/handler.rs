//! Team, service, and testimonial handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};

use crate::prelude::*;
use crate::types::{CreatedResponse, SuccessResponse};
use surplus_types::store_adapter::{
	Service, ServiceData, TeamMember, TeamMemberData, Testimonial, TestimonialData,
};

// Team members
//**************

/// GET /api/team
pub async fn list_team(State(app): State<App>) -> SpResult<(StatusCode, Json<Vec<TeamMember>>)> {
	let team = app.store_adapter.list_team().await?;

	Ok((StatusCode::OK, Json(team)))
}

/// POST /api/team
pub async fn create_team_member(
	State(app): State<App>,
	Json(req): Json<TeamMemberData>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(name = %req.name, "POST /api/team - Creating team member");

	let id = app.store_adapter.create_team_member(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PUT /api/team/:id
pub async fn update_team_member(
	State(app): State<App>,
	Path(member_id): Path<i64>,
	Json(req): Json<TeamMemberData>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(member_id = %member_id, "PUT /api/team/:id - Updating team member");

	app.store_adapter.update_team_member(member_id, req).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/team/:id
pub async fn delete_team_member(
	State(app): State<App>,
	Path(member_id): Path<i64>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(member_id = %member_id, "DELETE /api/team/:id - Deleting team member");

	app.store_adapter.delete_team_member(member_id).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// Services
//**********

/// GET /api/services
pub async fn list_services(State(app): State<App>) -> SpResult<(StatusCode, Json<Vec<Service>>)> {
	let services = app.store_adapter.list_services().await?;

	Ok((StatusCode::OK, Json(services)))
}

/// POST /api/services
pub async fn create_service(
	State(app): State<App>,
	Json(req): Json<ServiceData>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(title = %req.title, "POST /api/services - Creating service");

	let id = app.store_adapter.create_service(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PUT /api/services/:id
pub async fn update_service(
	State(app): State<App>,
	Path(service_id): Path<i64>,
	Json(req): Json<ServiceData>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(service_id = %service_id, "PUT /api/services/:id - Updating service");

	app.store_adapter.update_service(service_id, req).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/services/:id
pub async fn delete_service(
	State(app): State<App>,
	Path(service_id): Path<i64>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(service_id = %service_id, "DELETE /api/services/:id - Deleting service");

	app.store_adapter.delete_service(service_id).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// Testimonials
//**************

/// GET /api/testimonials
pub async fn list_testimonials(
	State(app): State<App>,
) -> SpResult<(StatusCode, Json<Vec<Testimonial>>)> {
	let testimonials = app.store_adapter.list_testimonials().await?;

	Ok((StatusCode::OK, Json(testimonials)))
}

/// POST /api/testimonials
pub async fn create_testimonial(
	State(app): State<App>,
	Json(req): Json<TestimonialData>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(client_name = %req.client_name, "POST /api/testimonials - Creating testimonial");

	let id = app.store_adapter.create_testimonial(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PUT /api/testimonials/:id
pub async fn update_testimonial(
	State(app): State<App>,
	Path(testimonial_id): Path<i64>,
	Json(req): Json<TestimonialData>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(testimonial_id = %testimonial_id, "PUT /api/testimonials/:id - Updating testimonial");

	app.store_adapter.update_testimonial(testimonial_id, req).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/testimonials/:id
pub async fn delete_testimonial(
	State(app): State<App>,
	Path(testimonial_id): Path<i64>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(testimonial_id = %testimonial_id, "DELETE /api/testimonials/:id - Deleting testimonial");

	app.store_adapter.delete_testimonial(testimonial_id).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// vim: ts=4
