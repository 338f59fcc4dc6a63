//! Domain logic for ImpactBridge: priority scoring, form validation, and
//! dashboard arithmetic.
//!
//! Nothing in this crate performs I/O, so it can be shared by the
//! repository layer, the API, and any future tooling.

pub mod crisis_case;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod priority;
pub mod types;
pub mod volunteer;
