//! Request handlers, one module per page area.

pub mod home;
pub mod organ;
pub mod substitution;
pub mod predictor;
pub mod histogram;
