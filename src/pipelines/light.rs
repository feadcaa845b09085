use wgpu::util::DeviceExt;

/// Uniform for the fixed three-light studio rig.
///
/// Directions are stored as the rig's light positions; the
/// shader normalizes them, which for lights aimed at the origin yields the
/// incoming light direction. Each colour packs its intensity into the w
/// component to respect the 16-byte uniform spacing.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// rgb + intensity.
    pub ambient: [f32; 4],
    /// rgb + intensity.
    pub main_color: [f32; 4],
    /// xyz, w unused.
    pub main_direction: [f32; 4],
    /// rgb + intensity.
    pub fill_color: [f32; 4],
    /// xyz, w unused.
    pub fill_direction: [f32; 4],
}

impl LightUniform {
    /// The rig the bust was designed under: grey ambient, white key light
    /// from the upper right, cool blue fill from the lower left.
    pub fn studio() -> Self {
        Self {
            ambient: [0.25, 0.25, 0.25, 0.5],
            main_color: [1.0, 1.0, 1.0, 1.0],
            main_direction: [5.0, 5.0, 5.0, 0.0],
            fill_color: [0.31, 0.765, 0.969, 0.3],
            fill_direction: [-5.0, 0.0, -5.0, 0.0],
        }
    }
}

#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(uniform: LightUniform, device: &wgpu::Device) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: None,
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: None,
    })
}
