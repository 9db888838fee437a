//! Course registration module
//!
//! Registrations arrive from the public enrollment form, get listed on the
//! dashboard together with their course title, and move through the
//! pending / approved / rejected workflow via status transitions.

pub mod handler;

// vim: ts=4
