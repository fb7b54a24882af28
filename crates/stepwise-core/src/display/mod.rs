//! Display formatting for forms and operation results.
//!
//! Domain models get `Display` implementations in [`models`]; collections and
//! operation results are wrapped in newtypes so each context formats the same
//! data consistently. Everything renders as markdown for the terminal
//! renderer.
//!
//! - [`view`]: [`FormView`], the full state of one form session
//! - [`collections`]: [`FormSummaries`], [`EventLines`]
//! - [`results`]: [`StepOutcome`], [`DeleteResult`]
//! - [`datetime`]: [`LocalDateTime`]
//!
//! # Examples
//!
//! ```rust
//! use stepwise_core::{display::EventLines, FormEvent};
//!
//! let events = EventLines(vec![FormEvent::Completed(0), FormEvent::Opening(1)]);
//! assert_eq!(events.to_string(), "- completed step 0\n- opened step 1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod view;

pub use collections::{EventLines, FormSummaries};
pub use datetime::LocalDateTime;
pub use results::{DeleteResult, StepOutcome};
pub use view::{FormView, StepView};
