//! Surplus is the administrative back-office for a consultancy site.
//!
//! # Features
//!
//! - Single process, single SQLite file
//!		- REST API consumed by the admin dashboard and the public site
//!		- static serving of the built dashboard bundle
//!	- Registration lifecycle (pending / approved / rejected)
//!	- Site settings with atomic bulk updates and seeded defaults
//!	- Course catalog, team, services, and testimonial management

#![forbid(unsafe_code)]

pub mod app;
pub mod bootstrap;
pub mod catalog;
pub mod content;
pub mod prelude;
pub mod registration;
pub mod routes;
pub mod settings;
pub mod stats;
pub mod types;

pub use crate::app::{App, AppBuilder, AppState};

// vim: ts=4
