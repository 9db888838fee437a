//! Shared helpers for the SQLite adapter

use surplus_types::prelude::*;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// True when the error is a SQLite uniqueness constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
	match err {
		sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
		_ => false,
	}
}

/// Maps an UPDATE/DELETE result to `NotFound` when no row matched
pub(crate) fn require_affected(res: sqlx::sqlite::SqliteQueryResult) -> SpResult<()> {
	if res.rows_affected() == 0 { Err(Error::NotFound) } else { Ok(()) }
}

// vim: ts=4
