//! Standalone Surplus server binary.
//!
//! Environment:
//!	- DB_DIR	directory holding the SQLite file (default ./data)
//!	- LISTEN	listen address (default 0.0.0.0:3000)
//!	- DIST_DIR	built dashboard bundle to serve (default ./dist)

use std::{env, path, sync::Arc};

use surplus::AppBuilder;
use surplus_store_adapter_sqlite::StoreAdapterSqlite;
use surplus_types::SpResult;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
	pub dist_dir: path::PathBuf,
}

#[tokio::main]
async fn main() -> SpResult<()> {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("0.0.0.0:3000".to_string()),
		dist_dir: path::PathBuf::from(env::var("DIST_DIR").unwrap_or("./dist".to_string())),
	};

	tokio::fs::create_dir_all(&config.db_dir).await?;
	let store_adapter = StoreAdapterSqlite::new(config.db_dir.join("surplus.db")).await?;

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.dist_dir(config.dist_dir)
		.store_adapter(Arc::new(store_adapter));
	builder.run().await
}

// vim: ts=4
