//! oncoscope-web — Web UI for the Oncoscope mutation table
//! Serves the reporting routes over the startup-loaded dataset:
//!   - Primary-site index and per-organ cancer-type counts
//!   - Substitution heat-map matrices (allele and amino acid)
//!   - Cancer-type predictor form
//!   - Tumour-origin histograms

pub mod charts;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
