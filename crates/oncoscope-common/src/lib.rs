//! oncoscope-common — Shared error types used across all Oncoscope crates.

pub mod error;

pub use error::{ApiError, Result};
