//! Work order validation pipeline built as a chain of responsibility.
//!
//! Each handler owns at most one successor. A handler either resolves a
//! request with its own success literal or forwards it untouched; the last
//! node answers with its failure literal when nothing upstream matched.

pub mod chain;
pub mod errors;
pub mod handler;
pub mod stages;

pub use chain::{Chain, Route};
pub use errors::ChainError;
pub use handler::{Handler, Stage};
pub use stages::{AvailabilityChecker, DeadlineChecker, StageKind, Validator};
