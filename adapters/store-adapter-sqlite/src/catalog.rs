//! Category and course storage
//!
//! Courses carry a denormalized category name rather than a foreign key;
//! renaming a category does not touch existing courses. Deleting a course
//! leaves registrations pointing at it dangling by design.

use sqlx::{Row, SqlitePool};

use surplus_types::prelude::*;
use surplus_types::store_adapter::{Category, Course, CourseData, CreateCategory};

use crate::utils::{inspect, is_unique_violation, require_affected};

// Categories
//************
pub(crate) async fn list_categories(db: &SqlitePool) -> SpResult<Vec<Category>> {
	let rows = sqlx::query("SELECT id, name, description FROM categories")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut categories = Vec::with_capacity(rows.len());
	for row in rows {
		categories.push(Category {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			name: row.try_get("name").map_err(|_| Error::DbError)?,
			description: row.try_get("description").map_err(|_| Error::DbError)?,
		});
	}

	Ok(categories)
}

/// Category names are unique; a duplicate surfaces as a validation error
/// so the dashboard can show it instead of a generic server failure
pub(crate) async fn create_category(db: &SqlitePool, data: CreateCategory) -> SpResult<i64> {
	let res = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?) RETURNING id")
		.bind(&data.name)
		.bind(&data.description)
		.fetch_one(db)
		.await;

	match res {
		Ok(row) => Ok(row.get(0)),
		Err(err) if is_unique_violation(&err) => {
			Err(Error::ValidationError(format!("category '{}' already exists", data.name)))
		}
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) async fn update_category(
	db: &SqlitePool,
	cat_id: i64,
	data: CreateCategory,
) -> SpResult<()> {
	let res = sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
		.bind(&data.name)
		.bind(&data.description)
		.bind(cat_id)
		.execute(db)
		.await;

	match res {
		Ok(res) => require_affected(res),
		Err(err) if is_unique_violation(&err) => {
			Err(Error::ValidationError(format!("category '{}' already exists", data.name)))
		}
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) async fn delete_category(db: &SqlitePool, cat_id: i64) -> SpResult<()> {
	sqlx::query("DELETE FROM categories WHERE id = ?")
		.bind(cat_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// Courses
//*********
pub(crate) async fn list_courses(db: &SqlitePool) -> SpResult<Vec<Course>> {
	let rows = sqlx::query(
		"SELECT id, title, description, duration, price, category, image_url FROM courses",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut courses = Vec::with_capacity(rows.len());
	for row in rows {
		courses.push(Course {
			id: row.try_get("id").map_err(|_| Error::DbError)?,
			title: row.try_get("title").map_err(|_| Error::DbError)?,
			description: row.try_get("description").map_err(|_| Error::DbError)?,
			duration: row.try_get("duration").map_err(|_| Error::DbError)?,
			price: row.try_get("price").map_err(|_| Error::DbError)?,
			category: row.try_get("category").map_err(|_| Error::DbError)?,
			image_url: row.try_get("image_url").map_err(|_| Error::DbError)?,
		});
	}

	Ok(courses)
}

pub(crate) async fn create_course(db: &SqlitePool, data: CourseData) -> SpResult<i64> {
	let row = sqlx::query(
		"INSERT INTO courses (title, description, duration, price, category, image_url)
		VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
	)
	.bind(&data.title)
	.bind(&data.description)
	.bind(&data.duration)
	.bind(data.price)
	.bind(&data.category)
	.bind(&data.image_url)
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(row.get(0))
}

pub(crate) async fn update_course(
	db: &SqlitePool,
	course_id: i64,
	data: CourseData,
) -> SpResult<()> {
	let res = sqlx::query(
		"UPDATE courses SET title = ?, description = ?, duration = ?, price = ?, category = ?, image_url = ?
		WHERE id = ?",
	)
	.bind(&data.title)
	.bind(&data.description)
	.bind(&data.duration)
	.bind(data.price)
	.bind(&data.category)
	.bind(&data.image_url)
	.bind(course_id)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	require_affected(res)
}

pub(crate) async fn delete_course(db: &SqlitePool, course_id: i64) -> SpResult<()> {
	sqlx::query("DELETE FROM courses WHERE id = ?")
		.bind(course_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
