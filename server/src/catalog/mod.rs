//! Course catalog module: categories and courses

pub mod handler;

// vim: ts=4
