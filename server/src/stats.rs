//! Dashboard stats handler

use axum::{Json, extract::State, http::StatusCode};

use crate::prelude::*;
use surplus_types::store_adapter::Stats;

/// GET /api/stats - Row counts for the dashboard landing page
pub async fn get_stats(State(app): State<App>) -> SpResult<(StatusCode, Json<Stats>)> {
	let stats = app.store_adapter.read_stats().await?;

	Ok((StatusCode::OK, Json(stats)))
}

// vim: ts=4
