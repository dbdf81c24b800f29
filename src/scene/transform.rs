use glam::{Affine2, Vec2};

use crate::surface::DrawSurface;
use super::NodeId;

/// Tolerance for all near-zero and near-one comparisons. Absorbs float drift
/// so that "no rotation" or "unit scale" survive round-trips through matrices.
pub const EPSILON: f32 = 5e-5;

fn around_zero(value: f32) -> bool {
    value > -EPSILON && value < EPSILON
}

/// Optional initial state for [`Transformable::from_options`]. Fields left as
/// `None` fall back to the defaults (zero position/rotation, unit scale, no
/// origin).
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformOptions {
    pub position: Option<Vec2>,
    pub rotation: Option<f32>,
    pub scale: Option<Vec2>,
    pub origin: Option<Vec2>,
}

/// 2D affine transform state for one scene-graph node.
///
/// Keeps three representations in sync: the decomposed
/// position/rotation/scale/origin fields, the composed world matrix
/// `transform`, and its inverse `inv_transform`. The matrices are `None`
/// until the first [`update_transform`](Self::update_transform) pass that
/// needs them, and both are rewritten together on every pass after that.
///
/// `need_transform` is true iff this node or any ancestor contributes a
/// non-identity transform; consumers must check it before reading either
/// matrix, since an early-out pass leaves stale contents behind.
#[derive(Debug, Clone)]
pub struct Transformable {
    /// Local translation.
    pub position: Vec2,
    /// Local rotation in radians, applied about `origin`. Positive rotation
    /// turns the +Y axis toward +X.
    pub rotation: f32,
    /// Local non-uniform scale, applied about `origin`.
    pub scale: Vec2,
    /// Pivot for rotation and scale. `None`, or both components within
    /// [`EPSILON`] of zero, means no pivot.
    pub origin: Option<Vec2>,
    /// Handle to the parent node in the external store. Set by the scene
    /// graph; never resolved by this component itself.
    pub parent: Option<NodeId>,
    /// Composed world matrix, lazily allocated.
    pub transform: Option<Affine2>,
    /// Inverse of `transform`, same lifecycle.
    pub inv_transform: Option<Affine2>,
    /// True iff this node or any ancestor has a non-identity effect.
    pub need_transform: bool,
}

impl Transformable {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            origin: None,
            parent: None,
            transform: None,
            inv_transform: None,
            need_transform: false,
        }
    }

    pub fn from_options(opts: &TransformOptions) -> Self {
        let mut t = Self::new();
        if let Some(position) = opts.position {
            t.position = position;
        }
        if let Some(rotation) = opts.rotation {
            t.rotation = rotation;
        }
        if let Some(scale) = opts.scale {
            t.scale = scale;
        }
        t.origin = opts.origin;
        t
    }

    /// True iff the node's own position/rotation/scale deviate from identity
    /// by more than [`EPSILON`]. Pure predicate, no side effect.
    pub fn need_local_transform(&self) -> bool {
        !around_zero(self.rotation)
            || !around_zero(self.position.x)
            || !around_zero(self.position.y)
            || !around_zero(self.scale.x - 1.0)
            || !around_zero(self.scale.y - 1.0)
    }

    /// Recompute the composed world matrix and its inverse from the local
    /// fields and the parent's already-updated state.
    ///
    /// Must be called parent-before-child within one traversal pass; the
    /// parent passed in is expected to have had its own `update_transform`
    /// run for that same pass. When neither the node nor its parent needs a
    /// transform this returns early and leaves any previously computed
    /// matrices untouched; they are stale, and `need_transform == false`
    /// tells consumers to ignore them.
    pub fn update_transform(&mut self, parent: Option<&Transformable>) {
        let parent_has_transform = parent.map_or(false, |p| p.need_transform);
        let need_local = self.need_local_transform();

        self.need_transform = need_local || parent_has_transform;
        if !self.need_transform {
            return;
        }

        let mut m = if need_local {
            self.local_transform()
        } else {
            Affine2::IDENTITY
        };

        if parent_has_transform {
            let parent_matrix = match parent.and_then(|p| p.transform) {
                Some(pm) => pm,
                None => {
                    // Parent was never updated this pass.
                    log::warn!("parent flagged need_transform without a matrix, using identity");
                    Affine2::IDENTITY
                }
            };
            if need_local {
                // Local first, then parent: child space into parent space
                // into world space.
                m = parent_matrix * m;
            } else {
                m = parent_matrix;
            }
        }

        self.transform = Some(m);
        self.inv_transform = Some(m.inverse());
    }

    /// Build the parent-independent matrix from origin, scale, rotation and
    /// position: scale and rotation are applied about `origin`, and the
    /// result is then placed at `position`.
    ///
    /// An origin with both components within [`EPSILON`] of zero is treated
    /// as absent. `origin` itself is left unchanged by this call.
    pub fn local_transform(&self) -> Affine2 {
        let origin = self
            .origin
            .filter(|o| !(around_zero(o.x) && around_zero(o.y)));

        let mut m = match origin {
            Some(o) => Affine2::from_translation(-o),
            None => Affine2::IDENTITY,
        };
        m = Affine2::from_scale(self.scale) * m;
        if self.rotation != 0.0 {
            // This crate's positive rotation is the opposite sense of glam's
            // from_angle; see the decomposition formula.
            m = Affine2::from_angle(-self.rotation) * m;
        }
        if let Some(o) = origin {
            m = Affine2::from_translation(o) * m;
        }
        Affine2::from_translation(self.position) * m
    }

    /// Push the composed matrix to a drawing surface as the six canvas-style
    /// components `(a, b, c, d, e, f)`. No-op while `need_transform` is
    /// false, leaving the surface on its current transform.
    pub fn set_transform<S: DrawSurface>(&self, surface: &mut S) {
        if !self.need_transform {
            return;
        }
        if let Some(m) = self.transform {
            let [a, b, c, d, e, f] = m.to_cols_array();
            surface.set_transform(a, b, c, d, e, f);
        }
    }

    /// Orient the node so its +Y axis points from `position` toward `target`,
    /// preserving the scale magnitudes. A target coincident with `position`
    /// is a no-op.
    ///
    /// Writes `transform` directly and resynchronizes the decomposed fields
    /// from it. `inv_transform` and `need_transform` are NOT refreshed here;
    /// call [`update_transform`](Self::update_transform) afterwards before
    /// relying on inverse mapping or surface output.
    pub fn look_at(&mut self, target: Vec2) {
        let v = (target - self.position).normalize_or_zero();
        if around_zero(v.x) && around_zero(v.y) {
            return;
        }

        // Y axis along the direction, X axis its -90° perpendicular, both
        // carrying the current scale; translation stays at position.
        self.transform = Some(Affine2::from_cols_array(&[
            v.y * self.scale.x,
            -v.x * self.scale.x,
            v.x * self.scale.y,
            v.y * self.scale.y,
            self.position.x,
            self.position.y,
        ]));
        self.decompose_transform();
    }

    /// Recover position, scale and rotation from the composed matrix. No-op
    /// when no matrix has been computed yet.
    ///
    /// Scale comes back as the Euclidean norm of each column and rotation as
    /// the column angle; this is exact only for matrices without shear, so a
    /// skewed matrix will not round-trip. Rotation recovery normalizes
    /// against both column norms, so a rotated non-uniform scale biases the
    /// recovered angle.
    pub fn decompose_transform(&mut self) {
        let Some(m) = self.transform else {
            return;
        };
        let [a, b, c, d, e, f] = m.to_cols_array();

        let mut sx = a * a + b * b;
        let mut sy = c * c + d * d;
        // Within tolerance of 1 the squared norm already is the norm.
        if !around_zero(sx - 1.0) {
            sx = sx.sqrt();
        }
        if !around_zero(sy - 1.0) {
            sy = sy.sqrt();
        }

        self.position = Vec2::new(e, f);
        self.scale = Vec2::new(sx, sy);
        self.rotation = (-b / sy).atan2(a / sx);
    }

    /// Map a global point into this node's local space. Identity when no
    /// transform is active.
    pub fn transform_coord_to_local(&self, x: f32, y: f32) -> Vec2 {
        match self.inv_transform {
            Some(inv) if self.need_transform => inv.transform_point2(Vec2::new(x, y)),
            _ => Vec2::new(x, y),
        }
    }

    /// Map a point in this node's local space to global space. Identity when
    /// no transform is active.
    pub fn transform_coord_to_global(&self, x: f32, y: f32) -> Vec2 {
        match self.transform {
            Some(m) if self.need_transform => m.transform_point2(Vec2::new(x, y)),
            _ => Vec2::new(x, y),
        }
    }
}

impl Default for Transformable {
    fn default() -> Self {
        Self::new()
    }
}
