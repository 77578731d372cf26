//! Application-facing surface: the [`App`] trait the runtime drives and
//! the per-frame context it hands out.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, MeshCtx};
