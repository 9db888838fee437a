use axum::{
	Router,
	routing::{get, patch, put},
};
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer,
};

use crate::AppState;
use crate::{catalog, content, registration, settings, stats};
use std::sync::Arc;

pub fn init(app: Arc<AppState>) -> Router {
	let api_router = Router::new()
		.route(
			"/api/settings",
			get(settings::handler::get_settings).post(settings::handler::update_settings),
		)
		.route(
			"/api/registrations",
			get(registration::handler::list_registrations)
				.post(registration::handler::create_registration),
		)
		.route("/api/registrations/{id}", patch(registration::handler::update_registration))
		.route(
			"/api/categories",
			get(catalog::handler::list_categories).post(catalog::handler::create_category),
		)
		.route(
			"/api/categories/{id}",
			put(catalog::handler::update_category)
				.delete(catalog::handler::delete_category),
		)
		.route(
			"/api/courses",
			get(catalog::handler::list_courses).post(catalog::handler::create_course),
		)
		.route(
			"/api/courses/{id}",
			put(catalog::handler::update_course)
				.delete(catalog::handler::delete_course),
		)
		.route(
			"/api/team",
			get(content::handler::list_team).post(content::handler::create_team_member),
		)
		.route(
			"/api/team/{id}",
			put(content::handler::update_team_member)
				.delete(content::handler::delete_team_member),
		)
		.route(
			"/api/services",
			get(content::handler::list_services).post(content::handler::create_service),
		)
		.route(
			"/api/services/{id}",
			put(content::handler::update_service)
				.delete(content::handler::delete_service),
		)
		.route(
			"/api/testimonials",
			get(content::handler::list_testimonials).post(content::handler::create_testimonial),
		)
		.route(
			"/api/testimonials/{id}",
			put(content::handler::update_testimonial)
				.delete(content::handler::delete_testimonial),
		)
		.route("/api/stats", get(stats::get_stats));

	// Anything outside /api serves the dashboard bundle, with SPA fallback
	// to index.html for client-side routes
	let index = app.opts.dist_dir.join("index.html");
	let static_service = ServeDir::new(&app.opts.dist_dir).not_found_service(ServeFile::new(index));

	api_router
		.with_state(app)
		.fallback_service(static_service)
		.layer(TraceLayer::new_for_http())
}

// vim: ts=4
