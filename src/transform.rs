use glam::{Mat4, Vec3};

use crate::error::{LuxrigError, LuxrigResult};

/// A local coordinate axis of the transform's current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Mutable rigid-transform cursor with save/restore history.
///
/// The cursor carries one cumulative transform. Translations and rotations
/// always apply in the cursor's *local* frame, so rotate-then-translate and
/// translate-then-rotate produce different origins. `push`/`pop` save and
/// restore full snapshots; there is no partial restore.
///
/// Placing a point on an arc needs no closed-form parametric formula:
/// translate out to the pivot by the arc radius, rotate by the angular step,
/// translate back, and read the origin.
#[derive(Clone, Debug)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    /// Start the cursor at `base`, typically the fixture's placement in
    /// world space.
    pub fn with_base(base: Mat4) -> Self {
        Self {
            current: base,
            saved: Vec::new(),
        }
    }

    /// Move the origin by `distance` along the given local axis.
    pub fn translate(&mut self, axis: Axis, distance: f32) -> &mut Self {
        let v = match axis {
            Axis::X => Vec3::new(distance, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, distance, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, distance),
        };
        self.current *= Mat4::from_translation(v);
        self
    }

    /// Rotate the local frame about the given axis through the current
    /// origin. Positive angles follow the right-hand rule.
    pub fn rotate(&mut self, axis: Axis, radians: f32) -> &mut Self {
        let rot = match axis {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
            Axis::Z => Mat4::from_rotation_z(radians),
        };
        self.current *= rot;
        self
    }

    pub fn translate_x(&mut self, distance: f32) -> &mut Self {
        self.translate(Axis::X, distance)
    }

    pub fn translate_y(&mut self, distance: f32) -> &mut Self {
        self.translate(Axis::Y, distance)
    }

    pub fn translate_z(&mut self, distance: f32) -> &mut Self {
        self.translate(Axis::Z, distance)
    }

    pub fn rotate_x(&mut self, radians: f32) -> &mut Self {
        self.rotate(Axis::X, radians)
    }

    pub fn rotate_y(&mut self, radians: f32) -> &mut Self {
        self.rotate(Axis::Y, radians)
    }

    pub fn rotate_z(&mut self, radians: f32) -> &mut Self {
        self.rotate(Axis::Z, radians)
    }

    /// Save a snapshot of the current transform.
    pub fn push(&mut self) -> &mut Self {
        self.saved.push(self.current);
        self
    }

    /// Restore the most recently pushed snapshot.
    pub fn pop(&mut self) -> LuxrigResult<&mut Self> {
        self.current = self
            .saved
            .pop()
            .ok_or_else(|| LuxrigError::illegal_state("pop on an empty transform stack"))?;
        Ok(self)
    }

    /// The cursor's current origin in world space.
    pub fn origin(&self) -> Vec3 {
        self.current.transform_point3(Vec3::ZERO)
    }

    pub fn matrix(&self) -> Mat4 {
        self.current
    }

    /// Number of unmatched `push` calls.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
