//! Site settings module
//!
//! A flat, dynamically keyed text map read on every public page render and
//! written only through the dashboard's bulk update form. Defaults are
//! seeded once at startup (see `crate::bootstrap`).

pub mod handler;

// vim: ts=4
