//! CLI library components for the term deposit predictor.

pub mod logging;
pub mod profile;
pub mod render;
