use super::ctx::FrameCtx;
use crate::input::InputEvent;
use crate::render::Overlay;

/// Whether the run loop keeps going.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by the [`Runtime`](crate::window::Runtime).
///
/// `on_frame` runs once per frame with the stage already timestamped;
/// returning ends the frame, and the runtime flushes whatever was
/// recorded. Returning [`AppControl::Exit`] shuts the loop down after the
/// flush.
pub trait App {
    /// Per-event hook, called before the event is folded into the input
    /// state.
    fn on_event(&mut self, _event: &InputEvent) -> AppControl {
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Overlay drawn on top of the scene each frame.
    fn overlay(&mut self) -> Option<&mut dyn Overlay> {
        None
    }
}
