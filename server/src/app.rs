//! App state type and builder

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use crate::prelude::*;
use crate::{bootstrap, routes};
use surplus_types::store_adapter::StoreAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub store_adapter: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	pub dist_dir: Box<Path>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	store_adapter: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "0.0.0.0:3000".into(),
				dist_dir: PathBuf::from("./dist").into(),
			},
			store_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<Path>>) -> &mut Self {
		self.opts.dist_dir = dist_dir.into();
		self
	}

	// Adapters
	pub fn store_adapter(&mut self, store_adapter: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store_adapter = Some(store_adapter);
		self
	}

	/// Assemble the app state without starting the server. Used directly by
	/// tests; `run()` builds on top of it.
	pub fn build(self) -> SpResult<App> {
		let store_adapter = self
			.store_adapter
			.ok_or_else(|| Error::Internal("no store adapter configured".into()))?;

		Ok(Arc::new(AppState { opts: self.opts, store_adapter }))
	}

	pub async fn run(self) -> SpResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Surplus back-office v{}", VERSION);

		let app = self.build()?;

		bootstrap::init(&app).await?;

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
