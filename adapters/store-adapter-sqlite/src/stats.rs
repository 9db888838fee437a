//! Dashboard counters

use sqlx::{Row, SqlitePool};

use surplus_types::prelude::*;
use surplus_types::store_adapter::Stats;

use crate::utils::inspect;

async fn count(db: &SqlitePool, query: &str) -> SpResult<i64> {
	let row = sqlx::query(query)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.try_get(0).map_err(|_| Error::DbError)
}

pub(crate) async fn read(db: &SqlitePool) -> SpResult<Stats> {
	Ok(Stats {
		total_courses: count(db, "SELECT COUNT(*) FROM courses").await?,
		total_registrations: count(db, "SELECT COUNT(*) FROM registrations").await?,
		pending_registrations: count(
			db,
			"SELECT COUNT(*) FROM registrations WHERE status = 'pending'",
		)
		.await?,
		team_members: count(db, "SELECT COUNT(*) FROM team").await?,
	})
}

// vim: ts=4
