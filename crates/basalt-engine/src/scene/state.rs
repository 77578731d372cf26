use glam::{Quat, Vec3, Vec4};

use super::{Snapshot, Submission, SubmissionList};
use crate::mesh::MeshHandle;
use crate::time::FrameTime;

/// Frame-scoped drawing surface.
///
/// Holds the model and camera slots plus the submission list. Mutation
/// goes through the typed cursors returned by [`Stage::model`] and
/// [`Stage::camera`]: a model cursor can draw, a camera cursor cannot, so
/// "draw while positioning the camera" is not expressible.
///
/// Generic over the mesh handle type so frame semantics can be tested
/// with plain values; the engine always uses [`MeshHandle`].
#[derive(Debug, Clone)]
pub struct Stage<M = MeshHandle> {
    model: Snapshot,
    camera_position: Vec3,
    camera_rotation: Quat,
    submissions: SubmissionList<M>,
    clear_color: Vec4,
    frame_time: FrameTime,
}

impl<M> Default for Stage<M> {
    fn default() -> Self {
        Self {
            model: Snapshot::model_defaults(),
            camera_position: Vec3::ZERO,
            camera_rotation: Quat::IDENTITY,
            submissions: SubmissionList::default(),
            clear_color: Vec4::new(0.0, 0.0, 0.2, 1.0),
            frame_time: FrameTime::default(),
        }
    }
}

impl<M> Stage<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a mesh and returns the model cursor for it.
    ///
    /// The model slot carries over from previous cursors within the same
    /// frame; `end_frame` resets it.
    pub fn model(&mut self, mesh: &M) -> ModelState<'_, M>
    where
        M: Clone,
    {
        ModelState {
            stage: self,
            mesh: mesh.clone(),
        }
    }

    /// Returns the camera cursor.
    pub fn camera(&mut self) -> CameraState<'_, M> {
        CameraState { stage: self }
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn camera_rotation(&self) -> Quat {
        self.camera_rotation
    }

    pub fn submissions(&self) -> &SubmissionList<M> {
        &self.submissions
    }

    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    /// Sets the background color used when the frame is flushed.
    /// Persists across frames.
    pub fn set_clear_color(&mut self, color: impl Into<Vec4>) {
        self.clear_color = color.into();
    }

    pub fn frame_time(&self) -> FrameTime {
        self.frame_time
    }

    pub(crate) fn set_frame_time(&mut self, time: FrameTime) {
        self.frame_time = time;
    }

    /// Ends the frame: drops the recorded submissions and resets the model
    /// slot to its defaults. Camera and clear color carry over.
    pub fn end_frame(&mut self) {
        self.submissions.clear();
        self.model = Snapshot::model_defaults();
    }
}

/// Model cursor: mutates the stage's model slot and records draws.
///
/// Setters return `&mut Self` for chaining; `draw` captures the slot by
/// value, so one cursor can record several submissions.
pub struct ModelState<'a, M = MeshHandle> {
    stage: &'a mut Stage<M>,
    mesh: M,
}

impl<'a, M: Clone> ModelState<'a, M> {
    pub fn position(&mut self, position: impl Into<Vec3>) -> &mut Self {
        self.stage.model.position = position.into();
        self
    }

    pub fn rotation(&mut self, rotation: Quat) -> &mut Self {
        self.stage.model.rotation = rotation;
        self
    }

    pub fn scale(&mut self, scale: impl Into<Vec3>) -> &mut Self {
        self.stage.model.scale = scale.into();
        self
    }

    pub fn uniform_scale(&mut self, scale: f32) -> &mut Self {
        self.stage.model.scale = Vec3::splat(scale);
        self
    }

    pub fn rgba(&mut self, color: impl Into<Vec4>) -> &mut Self {
        self.stage.model.color = color.into();
        self
    }

    pub fn rgb(&mut self, color: impl Into<Vec3>) -> &mut Self {
        self.stage.model.color = color.into().extend(1.0);
        self
    }

    /// Records a submission with the current slot values.
    pub fn draw(&mut self) -> &mut Self {
        self.stage.submissions.push(Submission {
            mesh: self.mesh.clone(),
            snapshot: self.stage.model,
        });
        self
    }
}

/// Camera cursor: mutates the stage's camera slot. Deliberately has no
/// `draw`.
pub struct CameraState<'a, M = MeshHandle> {
    stage: &'a mut Stage<M>,
}

impl<'a, M> CameraState<'a, M> {
    pub fn position(&mut self, position: impl Into<Vec3>) -> &mut Self {
        self.stage.camera_position = position.into();
        self
    }

    pub fn rotation(&mut self, rotation: Quat) -> &mut Self {
        self.stage.camera_rotation = rotation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use a plain string as the mesh handle; the stage never looks
    // inside it.
    fn stage() -> Stage<&'static str> {
        Stage::new()
    }

    #[test]
    fn draw_captures_slot_values_at_call_time() {
        let mut stage = stage();

        stage
            .model(&"cube")
            .position(Vec3::new(1.0, 2.0, 3.0))
            .rgb(Vec3::new(1.0, 0.0, 0.0))
            .draw()
            .position(Vec3::new(-4.0, 0.0, 0.0))
            .draw();

        let items = stage.submissions().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].snapshot.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(items[0].snapshot.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        // Second submission saw the later position, first one kept its own.
        assert_eq!(items[1].snapshot.position, Vec3::new(-4.0, 0.0, 0.0));
        assert_eq!(items[1].snapshot.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn submissions_keep_insertion_order() {
        let mut stage = stage();

        for i in 0..5 {
            stage
                .model(&"cube")
                .position(Vec3::new(i as f32, 0.0, 0.0))
                .draw();
        }

        let xs: Vec<f32> = stage
            .submissions()
            .items()
            .iter()
            .map(|s| s.snapshot.position.x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn model_slot_carries_across_cursors_within_a_frame() {
        let mut stage = stage();

        stage.model(&"a").uniform_scale(2.0);
        stage.model(&"b").draw();

        assert_eq!(
            stage.submissions().items()[0].snapshot.scale,
            Vec3::splat(2.0)
        );
    }

    #[test]
    fn end_frame_resets_model_slot_but_not_camera() {
        let mut stage = stage();

        stage.camera().position(Vec3::new(0.0, 2.0, 8.0));
        stage
            .model(&"cube")
            .position(Vec3::X)
            .uniform_scale(3.0)
            .rgba(Vec4::new(0.5, 0.5, 0.5, 0.5))
            .draw();

        stage.end_frame();

        assert!(stage.submissions().is_empty());
        assert_eq!(stage.camera_position(), Vec3::new(0.0, 2.0, 8.0));

        // A fresh cursor starts from defaults again.
        stage.model(&"cube").draw();
        let snap = stage.submissions().items()[0].snapshot;
        assert_eq!(snap.position, Vec3::ZERO);
        assert_eq!(snap.scale, Vec3::ONE);
        assert_eq!(snap.color, Vec4::ONE);
    }

    #[test]
    fn clear_color_defaults_to_dark_blue_and_persists() {
        let mut stage = stage();
        assert_eq!(stage.clear_color(), Vec4::new(0.0, 0.0, 0.2, 1.0));

        stage.set_clear_color(Vec4::new(0.1, 0.1, 0.1, 1.0));
        stage.end_frame();
        assert_eq!(stage.clear_color(), Vec4::new(0.1, 0.1, 0.1, 1.0));
    }
}
