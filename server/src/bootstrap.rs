//! Startup bootstrap: default settings seeding
//!
//! The public site reads every one of these keys on each render, so a fresh
//! database gets a usable set on first start. Seeding is gated on the
//! settings table being completely empty; an existing installation is never
//! overwritten, not even to fill in missing keys.

use crate::prelude::*;

pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[
	("site_name", "Surplus Consultancy"),
	("contact_email", "info@surplus.com"),
	("contact_phone", "+1 234 567 890"),
	("address", "123 Business Ave, Suite 100"),
	("hero_title", "Empowering Your Future with Surplus"),
	("hero_subtitle", "Expert consultancy services for students and professionals."),
];

pub async fn init(app: &App) -> SpResult<()> {
	let seeded = app.store_adapter.seed_settings(DEFAULT_SETTINGS).await?;

	if seeded {
		info!("Seeded {} default settings", DEFAULT_SETTINGS.len());
	} else {
		debug!("Settings already present, skipping defaults");
	}

	Ok(())
}

// vim: ts=4
