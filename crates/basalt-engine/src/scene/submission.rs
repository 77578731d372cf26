use glam::{Quat, Vec3, Vec4};

use crate::mesh::MeshHandle;

/// Model slot values captured at draw time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Snapshot {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: Vec4,
}

impl Snapshot {
    /// Slot values a fresh frame starts from: identity transform, opaque
    /// white.
    pub fn model_defaults() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            color: Vec4::ONE,
        }
    }
}

/// One recorded draw: the mesh plus the slot values at the moment of the
/// `draw` call. Later slot mutations never touch it.
#[derive(Debug, Clone)]
pub struct Submission<M = MeshHandle> {
    pub mesh: M,
    pub snapshot: Snapshot,
}

/// Ordered list of the frame's submissions.
///
/// Order is insertion order; the flush walks it front to back.
#[derive(Debug, Clone)]
pub struct SubmissionList<M = MeshHandle> {
    items: Vec<Submission<M>>,
}

impl<M> Default for SubmissionList<M> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<M> SubmissionList<M> {
    pub fn push(&mut self, submission: Submission<M>) {
        self.items.push(submission);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Submission<M>] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
