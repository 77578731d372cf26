use glam::{Quat, Vec3};

use crate::input::{InputState, Key};
use crate::scene::Stage;

/// Pitch saturates here rather than at ±π/2 so the view never reaches the
/// poles, where yaw and roll collapse into each other.
const PITCH_LIMIT: f32 = 1.5;

/// Free-flying camera driven by pointer-look and WASDQE movement.
///
/// Pointer movement steers yaw/pitch; W/S move along the view direction,
/// A/D strafe, Q/E move down/up. Holding Control slows movement to 1/8,
/// holding Shift doubles it; Control wins when both are held.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub pointer_sensitivity: f32,
    last_pointer: Option<(f32, f32)>,
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 5.0,
            pointer_sensitivity: 0.01,
            last_pointer: None,
        }
    }

    /// Current orientation as a quaternion (yaw around Y, then pitch
    /// around X).
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Integrates one frame of input and returns the resulting
    /// position/rotation pair.
    pub fn update(&mut self, input: &InputState, dt: f32) -> (Vec3, Quat) {
        self.apply_pointer_look(input);
        self.apply_movement(input, dt);
        (self.position, self.rotation())
    }

    /// Convenience: integrates input and writes the result into the
    /// stage's camera slot.
    pub fn drive<M>(&mut self, stage: &mut Stage<M>, input: &InputState, dt: f32) {
        let (position, rotation) = self.update(input, dt);
        stage.camera().position(position).rotation(rotation);
    }

    fn apply_pointer_look(&mut self, input: &InputState) {
        let Some(pos) = input.pointer_pos else {
            self.last_pointer = None;
            return;
        };

        if let Some((lx, ly)) = self.last_pointer {
            let dx = pos.0 - lx;
            let dy = pos.1 - ly;
            self.yaw -= dx * self.pointer_sensitivity;
            self.pitch = (self.pitch - dy * self.pointer_sensitivity)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.last_pointer = Some(pos);
    }

    fn apply_movement(&mut self, input: &InputState, dt: f32) {
        let rotation = self.rotation();
        let forward = rotation * Vec3::NEG_Z;
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let mut dir = Vec3::ZERO;
        if input.key_down(Key::W) {
            dir += forward;
        }
        if input.key_down(Key::S) {
            dir -= forward;
        }
        if input.key_down(Key::D) {
            dir += right;
        }
        if input.key_down(Key::A) {
            dir -= right;
        }
        if input.key_down(Key::E) {
            dir += up;
        }
        if input.key_down(Key::Q) {
            dir -= up;
        }

        if dir == Vec3::ZERO {
            return;
        }

        let modifier = if input.modifiers.ctrl {
            0.125
        } else if input.modifiers.shift {
            2.0
        } else {
            1.0
        };

        self.position += dir.normalize() * self.move_speed * modifier * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputFrame, Key, KeyState, Modifiers, PointerMoveEvent};

    fn input_with_keys(keys: &[Key], modifiers: Modifiers) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::ModifiersChanged(modifiers));
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    modifiers,
                    code: 0,
                    repeat: false,
                },
            );
        }
        state
    }

    fn move_pointer(cam: &mut FlyCamera, x: f32, y: f32) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x, y }),
        );
        cam.update(&state, 0.016);
    }

    #[test]
    fn no_keys_means_no_movement() {
        let mut cam = FlyCamera::new(Vec3::new(1.0, 2.0, 3.0));
        let input = input_with_keys(&[], Modifiers::default());
        cam.update(&input, 1.0);
        assert_eq!(cam.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn forward_key_moves_down_negative_z_at_base_speed() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        let input = input_with_keys(&[Key::W], Modifiers::default());
        cam.update(&input, 1.0);
        assert!((cam.position - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn control_slows_and_beats_shift() {
        let both = Modifiers {
            shift: true,
            ctrl: true,
            ..Default::default()
        };
        let mut cam = FlyCamera::new(Vec3::ZERO);
        let input = input_with_keys(&[Key::W], both);
        cam.update(&input, 1.0);
        assert!((cam.position.z + 5.0 * 0.125).abs() < 1e-5, "{:?}", cam.position);
    }

    #[test]
    fn shift_doubles_speed() {
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        let mut cam = FlyCamera::new(Vec3::ZERO);
        let input = input_with_keys(&[Key::E], shift);
        cam.update(&input, 1.0);
        assert!((cam.position.y - 10.0).abs() < 1e-5, "{:?}", cam.position);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        let input = input_with_keys(&[Key::W, Key::D], Modifiers::default());
        cam.update(&input, 1.0);
        assert!((cam.position.length() - 5.0).abs() < 1e-4, "{:?}", cam.position);
    }

    #[test]
    fn pointer_right_turns_yaw_left() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        move_pointer(&mut cam, 100.0, 100.0);
        move_pointer(&mut cam, 150.0, 100.0);
        assert!((cam.yaw + 0.5).abs() < 1e-5, "yaw {}", cam.yaw);
    }

    #[test]
    fn pitch_saturates_at_the_limit() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        move_pointer(&mut cam, 0.0, 1000.0);
        // Dragging the pointer far upward cannot push pitch past the clamp.
        move_pointer(&mut cam, 0.0, 0.0);
        assert!((cam.pitch - PITCH_LIMIT).abs() < 1e-6, "pitch {}", cam.pitch);
        move_pointer(&mut cam, 0.0, 10_000.0);
        assert!((cam.pitch + PITCH_LIMIT).abs() < 1e-6, "pitch {}", cam.pitch);
    }

    #[test]
    fn first_pointer_sample_does_not_jerk_the_view() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        move_pointer(&mut cam, 9999.0, 9999.0);
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);
    }
}
