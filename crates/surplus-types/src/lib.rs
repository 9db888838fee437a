//! Shared types for the Surplus back-office.
//!
//! This crate contains the error type, common value types, and the store
//! adapter trait shared between the server crate and the storage adapter
//! implementations.

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod types;

pub use error::{Error, SpResult};

// vim: ts=4
