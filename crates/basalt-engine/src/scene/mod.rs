//! Per-frame scene state.
//!
//! The [`Stage`] is the surface applications draw against: it holds the
//! current model and camera slots and records [`Submission`]s in call
//! order. It is pure CPU state with no GPU types, so frame semantics are
//! unit-testable without a device.

mod state;
mod submission;

pub use state::{CameraState, ModelState, Stage};
pub use submission::{Snapshot, Submission, SubmissionList};
