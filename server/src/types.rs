//! Common API response types
//!
//! Mutations answer with `{"success": true}` and creations with
//! `{"id": N}`, which is what the dashboard expects.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
	pub success: bool,
}

impl SuccessResponse {
	pub fn new() -> Self {
		SuccessResponse { success: true }
	}
}

impl Default for SuccessResponse {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
	pub id: i64,
}

// vim: ts=4
