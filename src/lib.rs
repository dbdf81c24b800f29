pub mod demo;
pub mod scene;
pub mod surface;

pub use scene::{NodeId, Scene, TransformOptions, Transformable, EPSILON};
pub use surface::{DrawSurface, SurfaceState};
