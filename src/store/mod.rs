//! In-memory content store.
//!
//! The store is the only source of truth and lives for the lifetime of the
//! process. Restarting the service brings back the seed data.

mod repository;
pub mod seed;

pub use repository::*;
