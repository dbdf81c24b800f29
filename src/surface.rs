/// A 2D drawing surface that accepts a canvas-style affine transform.
///
/// The six components describe the matrix `[a c e; b d f; 0 0 1]` applied to
/// column points, the same layout `glam::Affine2::to_cols_array` produces.
/// Nodes whose `need_transform` flag is false never call this, leaving the
/// surface on whatever transform it already carries.
pub trait DrawSurface {
    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32);
}

/// Minimal [`DrawSurface`] that just remembers the last transform applied.
/// Stands in for a real canvas context in the demo and in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub transform: [f32; 6],
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            transform: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for SurfaceState {
    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.transform = [a, b, c, d, e, f];
    }
}
