//! Error type shared by the server and the storage adapters.
//!
//! Every error renders as a machine-readable `{"error": message}` JSON body
//! so the dashboard can display it instead of crashing the request flow.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type SpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Referenced record does not exist
	NotFound,
	/// Request failed a validation check (missing/empty field, bad value)
	ValidationError(String),
	/// The persistence layer failed; details are logged, not leaked
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};
		(status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
	}
}

// vim: ts=4
