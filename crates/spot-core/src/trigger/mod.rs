//! Trigger cycle state and the values a cycle reports back.

mod motion;
mod outcome;
mod state;

pub use motion::MotionEvent;
pub use outcome::{CycleOutcome, UploadOutcome};
pub use state::{CycleGuard, TriggerState};
