//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame
//! to obtain a `FrameTime` snapshot. The reported delta is always the
//! wall-clock duration of the frame that just finished, never an estimate
//! of the frame about to run.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
