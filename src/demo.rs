use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

use crate::{NodeId, Scene, TransformOptions, Transformable};

/// Handles to the nodes [`create_demo_scene`] builds, root to leaf.
pub struct DemoNodes {
    pub panel: NodeId,
    pub widget: NodeId,
    pub pointer: NodeId,
}

/// Build a small three-level hierarchy: a panel scaled 2x, a widget offset
/// and rotated inside it, and a pointer oriented at a fixed target.
pub fn create_demo_scene() -> (Scene, DemoNodes) {
    let mut scene = Scene::new();

    let panel = scene.add(Transformable::from_options(&TransformOptions {
        position: Some(Vec2::new(100.0, 50.0)),
        scale: Some(Vec2::new(2.0, 2.0)),
        ..Default::default()
    }));

    let widget = scene.add_child(
        panel,
        Transformable::from_options(&TransformOptions {
            position: Some(Vec2::new(40.0, 0.0)),
            rotation: Some(FRAC_PI_4),
            origin: Some(Vec2::new(10.0, 10.0)),
            ..Default::default()
        }),
    );

    let pointer = scene.add_child(widget, Transformable::new());
    scene.get_mut(pointer).look_at(Vec2::new(30.0, 40.0));

    scene.update_transforms();

    (scene, DemoNodes { panel, widget, pointer })
}
