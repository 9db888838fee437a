//! Site content module: team members, services, testimonials

pub mod handler;

// vim: ts=4
