//! GPU upload and per-frame drawing of a built model tree.
//!
//! [`Scene`] owns the model hierarchy, the shared materials and all GPU
//! buffers derived from them. Upload happens once: every surface found in a
//! deterministic depth-first walk gets its own vertex, index and
//! single-instance transform buffer, and each of the shared materials gets a
//! uniform buffer plus bind group. Per frame, [`Scene::write_buffers`] walks
//! the tree in the same order and rewrites the transform and material
//! uniforms, so animation only ever touches buffer contents, never topology.

use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        material::{MaterialSet, material_layout},
        scene_graph::Node,
        transform::TransformRaw,
    },
};

/// GPU buffers for one surface of the tree.
#[derive(Debug)]
pub struct SurfaceBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    pub instance: wgpu::Buffer,
    pub index_count: u32,
    pub transparent: bool,
    pub material_index: usize,
}

/// The uploaded model: tree, materials and all derived GPU state.
#[derive(Debug)]
pub struct Scene {
    pub root: Node,
    pub materials: MaterialSet,
    surfaces: Vec<SurfaceBuffers>,
    material_buffers: Vec<wgpu::Buffer>,
    material_bind_groups: Vec<wgpu::BindGroup>,
}

impl Scene {
    /// Create GPU buffers for every surface and material of the tree.
    pub fn upload(root: Node, materials: MaterialSet, device: &wgpu::Device) -> Self {
        let layout = material_layout(device);
        let mut material_buffers = Vec::with_capacity(materials.len());
        let mut material_bind_groups = Vec::with_capacity(materials.len());
        for (_, material) in materials.iter() {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Material Buffer"),
                contents: bytemuck::cast_slice(&[material.to_raw()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            material_bind_groups.push(device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("material_bind_group"),
            }));
            material_buffers.push(buffer);
        }

        let mut surfaces = Vec::new();
        root.visit_surfaces(&mut |surface, world, world_rotation| {
            let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&surface.geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&surface.geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let instance = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Instance Buffer"),
                contents: bytemuck::cast_slice(&[TransformRaw::new(world, world_rotation)]),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
            surfaces.push(SurfaceBuffers {
                vertex,
                index,
                instance,
                index_count: surface.geometry.indices.len() as u32,
                transparent: materials.get(surface.material).transparent,
                material_index: surface.material.index(),
            });
        });

        Self {
            root,
            materials,
            surfaces,
            material_buffers,
            material_bind_groups,
        }
    }

    /// Push the current transforms and material values to the GPU.
    ///
    /// The walk repeats the upload-time traversal, so buffer index i always
    /// belongs to the i-th surface encountered.
    pub fn write_buffers(&self, queue: &wgpu::Queue) {
        for (index, (_, material)) in self.materials.iter().enumerate() {
            queue.write_buffer(
                &self.material_buffers[index],
                0,
                bytemuck::cast_slice(&[material.to_raw()]),
            );
        }

        let surfaces = &self.surfaces;
        let mut cursor = 0;
        self.root.visit_surfaces(&mut |_, world, world_rotation| {
            queue.write_buffer(
                &surfaces[cursor].instance,
                0,
                bytemuck::cast_slice(&[TransformRaw::new(world, world_rotation)]),
            );
            cursor += 1;
        });
    }

    /// Record draw calls: all opaque surfaces first, then transparent ones.
    pub fn draw(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(1, &ctx.camera.bind_group, &[]);
        render_pass.set_bind_group(2, &ctx.light.bind_group, &[]);

        render_pass.set_pipeline(&ctx.pipelines.basic);
        for surface in self.surfaces.iter().filter(|s| !s.transparent) {
            self.draw_surface(surface, render_pass);
        }

        render_pass.set_pipeline(&ctx.pipelines.transparent);
        for surface in self.surfaces.iter().filter(|s| s.transparent) {
            self.draw_surface(surface, render_pass);
        }
    }

    fn draw_surface(&self, surface: &SurfaceBuffers, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.material_bind_groups[surface.material_index], &[]);
        render_pass.set_vertex_buffer(0, surface.vertex.slice(..));
        render_pass.set_vertex_buffer(1, surface.instance.slice(..));
        render_pass.set_index_buffer(surface.index.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..surface.index_count, 0, 0..1);
    }

    /// Number of uploaded surfaces (one buffer set each).
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}
