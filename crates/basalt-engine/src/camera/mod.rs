//! Camera controllers.
//!
//! The engine core only knows a camera position and rotation; controllers
//! like [`FlyCamera`] turn raw input into those two values.

mod fly;

pub use fly::FlyCamera;
