//! Settings handlers

use axum::{Json, extract::State, http::StatusCode};
use std::collections::HashMap;

use crate::prelude::*;
use crate::types::SuccessResponse;

/// GET /api/settings - The whole store as one flat map
pub async fn get_settings(
	State(app): State<App>,
) -> SpResult<(StatusCode, Json<HashMap<String, String>>)> {
	let settings = app.store_adapter.list_settings().await?;

	Ok((StatusCode::OK, Json(settings)))
}

/// POST /api/settings - Atomic bulk upsert
///
/// Accepts arbitrary keys; values are coerced to text before storage
/// (strings verbatim, anything else as its JSON rendering). Keys absent
/// from the body are left untouched.
pub async fn update_settings(
	State(app): State<App>,
	Json(updates): Json<HashMap<String, serde_json::Value>>,
) -> SpResult<(StatusCode, Json<SuccessResponse>)> {
	info!(keys = updates.len(), "POST /api/settings - Bulk update");

	let updates: HashMap<String, String> = updates
		.into_iter()
		.map(|(key, value)| {
			let value = match value {
				serde_json::Value::String(s) => s,
				v => v.to_string(),
			};
			(key, value)
		})
		.collect();

	app.store_adapter.update_settings(&updates).await?;

	Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

// vim: ts=4
