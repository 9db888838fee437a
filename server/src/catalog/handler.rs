//! Category and course handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};

use crate::prelude::*;
use crate::types::{CreatedResponse, SuccessResponse};
use surplus_types::store_adapter::{Category, Course, CourseData, CreateCategory};

// Categories
//************

/// GET /api/categories
pub async fn list_categories(
	State(app): State<App>,
) -> SpResult<(StatusCode, Json<Vec<Category>>)> {
	let categories = app.store_adapter.list_categories().await?;

	Ok((StatusCode::OK, Json(categories)))
}

/// POST /api/categories - Names are unique; duplicates come back as 400
pub async fn create_category(
	State(app): State<App>,
	Json(req): Json<CreateCategory>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(name = %req.name, "POST /api/categories - Creating category");

	let id = app.store_adapter.create_category(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PUT /api/categories/:id - Full replace; renaming does not cascade to
/// courses referencing the old name
pub async fn update_category(
	State(app): State<App>,
	Path(cat_id): Path<i64>,
	Json(req): Json<CreateCategory>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(cat_id = %cat_id, "PUT /api/categories/:id - Updating category");

	app.store_adapter.update_category(cat_id, req).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/categories/:id
pub async fn delete_category(
	State(app): State<App>,
	Path(cat_id): Path<i64>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(cat_id = %cat_id, "DELETE /api/categories/:id - Deleting category");

	app.store_adapter.delete_category(cat_id).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// Courses
//*********

/// GET /api/courses
pub async fn list_courses(State(app): State<App>) -> SpResult<(StatusCode, Json<Vec<Course>>)> {
	let courses = app.store_adapter.list_courses().await?;

	Ok((StatusCode::OK, Json(courses)))
}

/// POST /api/courses
pub async fn create_course(
	State(app): State<App>,
	Json(req): Json<CourseData>,
) -> SpResult<(StatusCode, Json<CreatedResponse>)> {
	info!(title = %req.title, "POST /api/courses - Creating course");

	let id = app.store_adapter.create_course(req).await?;

	Ok((StatusCode::OK, Json(CreatedResponse { id })))
}

/// PUT /api/courses/:id - Full replace
pub async fn update_course(
	State(app): State<App>,
	Path(course_id): Path<i64>,
	Json(req): Json<CourseData>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(course_id = %course_id, "PUT /api/courses/:id - Updating course");

	app.store_adapter.update_course(course_id, req).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/courses/:id - Registrations referencing the course keep
/// their now-dangling course_id
pub async fn delete_course(
	State(app): State<App>,
	Path(course_id): Path<i64>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(course_id = %course_id, "DELETE /api/courses/:id - Deleting course");

	app.store_adapter.delete_course(course_id).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// vim: ts=4
