//! Local transform data and its GPU representation.
//!
//! Every scene node carries a [`Transform`]: a local position, an Euler
//! rotation and a scale. World matrices are accumulated during the render
//! walk and packed into [`TransformRaw`] for the per-node instance buffer.

use cgmath::{Euler, Matrix3, Matrix4, Quaternion, Rad, Vector3};

use crate::data_structures::mesh::Vertex;

/// Local transformation of a scene node: position, Euler rotation and scale.
///
/// Rotations are plain Euler angles in radians because the model recipe is
/// written in single-axis rotations (ear tilt, ring flip, root sway). The
/// quaternion form is derived on demand for matrix composition.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transformation: no move, rotate, or scale.
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn rotation_quat(&self) -> Quaternion<f32> {
        Quaternion::from(self.rotation)
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * The raw transform is the actual per-node data stored on the GPU: the world
 * matrix plus the rotation part for transforming normals.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
}

impl TransformRaw {
    /// Pack an accumulated world matrix and world rotation for upload.
    ///
    /// The normal matrix is the pure rotation; scales in this scene are
    /// uniform so the inverse-transpose reduces to the rotation itself.
    pub fn new(world: Matrix4<f32>, world_rotation: Quaternion<f32>) -> Self {
        Self {
            model: world.into(),
            normal: Matrix3::from(world_rotation).into(),
        }
    }
}

/**
 * As we store per-node data directly in GPU memory we need to tell what the
 * bytes refer to.
 *
 * Stride layout here: world matrix as four 4d vectors, then the normal matrix
 * as three 3d vectors. Locations continue after the mesh vertex attributes.
 */
impl Vertex for TransformRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TransformRaw>() as wgpu::BufferAddress,
            // The shader advances to the next element per instance, not per vertex.
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // A mat4 takes up 4 vertex slots as it is technically 4 vec4s.
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Normal matrix as three vec3s.
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
