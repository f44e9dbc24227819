//! oncoscope-dataset — In-memory mutation table behind the Oncoscope web UI.
//!
//! Loads a static CSV export of cancer-mutation observations at process
//! start and exposes the query operations the routes are built on:
//!   - Distinct category values (validation + form population)
//!   - Equality filtering over one or more columns
//!   - Per-column value counts within a filtered subset
//!   - Two-way cross-tabulation with margin totals
//!   - Normalized percentage distributions
//!
//! The table is read-only after load; handlers share it behind an `Arc`
//! with no locking.

pub mod loader;
pub mod record;
pub mod table;

pub use loader::load_table;
pub use record::{Column, MutationRecord};
pub use table::{CrossTab, MutationTable};
