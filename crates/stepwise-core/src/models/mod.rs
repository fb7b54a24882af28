//! Data models for steps, derived step states and stored form sessions.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data types.

pub mod filters;
pub mod record;
pub mod snapshot;
pub mod state;
pub mod step;

#[cfg(test)]
mod tests;

pub use filters::FormFilter;
pub use record::{FormRecord, FormSummary};
pub use snapshot::FormSnapshot;
pub use state::StepState;
pub use step::Step;
