//! Sections of the single-page form.

mod form;
mod insights;
mod result;

pub use form::{FormAction, FormView};
pub use insights::InsightsView;
pub use result::ResultView;
