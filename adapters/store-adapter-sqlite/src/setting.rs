//! Settings key-value store
//!
//! A flat map of text keys to text values consumed by every page render.
//! The bulk update is the only multi-statement write in the system and runs
//! in a single transaction so readers never observe a half-applied batch.

use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

use surplus_types::prelude::*;

use crate::utils::inspect;

pub(crate) async fn list(db: &SqlitePool) -> SpResult<HashMap<String, String>> {
	let rows = sqlx::query("SELECT key, value FROM settings")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut settings = HashMap::new();
	for row in rows {
		let key: String = row.try_get("key").map_err(|_| Error::DbError)?;
		let value: Option<String> = row.try_get("value").map_err(|_| Error::DbError)?;
		settings.insert(key, value.unwrap_or_default());
	}

	Ok(settings)
}

pub(crate) async fn read(db: &SqlitePool, key: &str) -> SpResult<Option<String>> {
	let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => {
			let value: Option<String> = row.try_get("value").map_err(|_| Error::DbError)?;
			Ok(Some(value.unwrap_or_default()))
		}
		None => Ok(None),
	}
}

/// Upsert every pair in `updates` atomically. Keys outside the input are
/// left untouched; nothing is ever deleted through this path.
pub(crate) async fn update(db: &SqlitePool, updates: &HashMap<String, String>) -> SpResult<()> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	for (key, value) in updates {
		sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
			.bind(key)
			.bind(value)
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	Ok(())
}

/// Seed the defaults if and only if the table is completely empty. A
/// partially populated store is left alone, even when some default keys
/// are missing. The emptiness check and the inserts share one transaction.
pub(crate) async fn seed(db: &SqlitePool, defaults: &[(&str, &str)]) -> SpResult<bool> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let row = sqlx::query("SELECT COUNT(*) AS count FROM settings")
		.fetch_one(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	let count: i64 = row.try_get("count").map_err(|_| Error::DbError)?;

	if count > 0 {
		return Ok(false);
	}

	for &(key, value) in defaults {
		sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
			.bind(key)
			.bind(value)
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	Ok(true)
}

// vim: ts=4
