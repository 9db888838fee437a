//! Database schema initialization
//!
//! Creates all tables on first startup; every statement is `IF NOT EXISTS`
//! so re-running against an existing file is a no-op.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			key text NOT NULL,
			value text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Catalog
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS categories (
			id integer PRIMARY KEY AUTOINCREMENT,
			name text NOT NULL UNIQUE,
			description text
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS courses (
			id integer PRIMARY KEY AUTOINCREMENT,
			title text NOT NULL,
			description text,
			duration text,
			price real,
			category text,				-- denormalized category name, no FK
			image_url text
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Registrations
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS registrations (
			id integer PRIMARY KEY AUTOINCREMENT,
			course_id integer,			-- soft reference, not enforced
			full_name text NOT NULL,
			email text NOT NULL,
			phone text,
			status text DEFAULT 'pending',
			created_at integer DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Content
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS team (
			id integer PRIMARY KEY AUTOINCREMENT,
			name text NOT NULL,
			role text,
			bio text,
			image_url text
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS services (
			id integer PRIMARY KEY AUTOINCREMENT,
			title text NOT NULL,
			description text,
			icon text
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS testimonials (
			id integer PRIMARY KEY AUTOINCREMENT,
			client_name text NOT NULL,
			content text NOT NULL,
			rating integer
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
