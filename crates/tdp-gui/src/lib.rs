//! Bank Term Deposit Subscription Predictor - GUI Library
//!
//! The form state and settings are exposed for testing.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
