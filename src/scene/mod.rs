pub mod transform;

pub use transform::{Transformable, TransformOptions, EPSILON};

use glam::Vec2;

/// Handle to a node stored in a [`Scene`]. Non-owning; the scene owns every
/// node's lifetime, handles are plain indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Arena of scene-graph nodes with their transform state.
///
/// Nodes are stored in creation order, and parents must be created before
/// their children, so one pass over the arena is a valid pre-order traversal.
/// That ordering is what lets [`update_transforms`](Self::update_transforms)
/// read each parent's already-updated matrix while writing the child's.
pub struct Scene {
    nodes: Vec<Transformable>,
}

impl Scene {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root-level node and return its handle.
    pub fn add(&mut self, node: Transformable) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a node parented to `parent` and return its handle.
    pub fn add_child(&mut self, parent: NodeId, node: Transformable) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent node");
        let mut node = node;
        node.parent = Some(parent);
        self.add(node)
    }

    /// Re-link a node under a new parent (or detach it with `None`).
    /// The parent must precede the node in creation order.
    pub fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) {
        if let Some(p) = parent {
            assert!(p.0 < node.0, "parent must be created before its child");
        }
        self.nodes[node.0].parent = parent;
    }

    pub fn get(&self, id: NodeId) -> &Transformable {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Transformable {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run one parent-before-child pass of
    /// [`Transformable::update_transform`] over every node.
    pub fn update_transforms(&mut self) {
        for i in 0..self.nodes.len() {
            let (updated, rest) = self.nodes.split_at_mut(i);
            let node = &mut rest[0];
            // Creation order guarantees the parent sits in the updated half.
            let parent = node.parent.map(|NodeId(p)| &updated[p]);
            node.update_transform(parent);
        }
        log::trace!("updated transforms for {} nodes", self.nodes.len());
    }

    /// Map a global point into `id`'s local space.
    pub fn coord_to_local(&self, id: NodeId, x: f32, y: f32) -> Vec2 {
        self.nodes[id.0].transform_coord_to_local(x, y)
    }

    /// Map a point in `id`'s local space to global space.
    pub fn coord_to_global(&self, id: NodeId, x: f32, y: f32) -> Vec2 {
        self.nodes[id.0].transform_coord_to_global(x, y)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
