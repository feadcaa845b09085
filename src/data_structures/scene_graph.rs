//! Scene graph and hierarchical scene organization.
//!
//! A [`Node`] is one positioned point in the hierarchy. Parents own their
//! children outright, so dropping the root tears down the whole tree; a node
//! optionally carries a [`Surface`] (geometry plus a shared material handle)
//! that the renderer picks up during upload. The topology of a built tree is
//! never changed at runtime; only transform values mutate.

use cgmath::{Euler, Matrix4, Quaternion, Rad, SquareMatrix, Vector3};

use crate::data_structures::{material::MaterialId, mesh::MeshData, transform::Transform};

/// A renderable shape attached to a node: geometry plus its material handle.
#[derive(Clone, Debug)]
pub struct Surface {
    pub geometry: MeshData,
    pub material: MaterialId,
}

/// One point in the scene hierarchy.
#[derive(Clone, Debug)]
pub struct Node {
    pub transform: Transform,
    surface: Option<Surface>,
    children: Vec<Node>,
}

impl Node {
    /// An empty grouping node at the local origin.
    pub fn group() -> Self {
        Self {
            transform: Transform::new(),
            surface: None,
            children: Vec::new(),
        }
    }

    /// A leaf node carrying geometry with one of the shared materials.
    pub fn mesh(geometry: MeshData, material: MaterialId) -> Self {
        Self {
            transform: Transform::new(),
            surface: Some(Surface { geometry, material }),
            children: Vec::new(),
        }
    }

    /// Set the local position (builder style).
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vector3::new(x, y, z);
        self
    }

    /// Set the local Euler rotation in radians (builder style).
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Euler::new(Rad(x), Rad(y), Rad(z));
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Depth-first traversal over every node in the tree, self included.
    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Depth-first traversal over all surfaces with their accumulated world
    /// transform. The walk order is deterministic, which the renderer relies
    /// on to match per-frame buffer writes to the buffers created at upload.
    pub fn visit_surfaces(
        &self,
        f: &mut impl FnMut(&Surface, Matrix4<f32>, Quaternion<f32>),
    ) {
        self.visit_surfaces_inner(Matrix4::identity(), Quaternion::new(1.0, 0.0, 0.0, 0.0), f);
    }

    fn visit_surfaces_inner(
        &self,
        parent: Matrix4<f32>,
        parent_rotation: Quaternion<f32>,
        f: &mut impl FnMut(&Surface, Matrix4<f32>, Quaternion<f32>),
    ) {
        let world = parent * self.transform.to_matrix();
        let world_rotation = parent_rotation * self.transform.rotation_quat();
        if let Some(surface) = &self.surface {
            f(surface, world, world_rotation);
        }
        for child in &self.children {
            child.visit_surfaces_inner(world, world_rotation, f);
        }
    }
}
