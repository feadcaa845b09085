//! Shared surface materials.
//!
//! Exactly four materials exist for the lifetime of the program: body,
//! accent, glow and visor. They live in a fixed arena ([`MaterialSet`]) and
//! scene nodes reference them by [`MaterialId`], never by copy, so mutating
//! the glow intensity in one place is observed by every node that uses it.

/// Handle into the material arena.
///
/// Doubles as the array index, which keeps the fan-out mechanics trivial: a
/// node stores two bytes, the updater writes one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialId {
    Body,
    Accent,
    Glow,
    Visor,
}

impl MaterialId {
    pub const ALL: [MaterialId; 4] = [
        MaterialId::Body,
        MaterialId::Accent,
        MaterialId::Glow,
        MaterialId::Visor,
    ];

    pub fn index(self) -> usize {
        match self {
            MaterialId::Body => 0,
            MaterialId::Accent => 1,
            MaterialId::Glow => 2,
            MaterialId::Visor => 3,
        }
    }
}

/// Named surface-appearance descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transparent: bool,
}

fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

impl Material {
    pub fn to_raw(&self) -> MaterialRaw {
        MaterialRaw {
            base_color: [
                self.base_color[0],
                self.base_color[1],
                self.base_color[2],
                self.opacity,
            ],
            emissive: [
                self.emissive[0],
                self.emissive[1],
                self.emissive[2],
                self.emissive_intensity,
            ],
            params: [self.metalness, self.roughness, 0.0, 0.0],
        }
    }
}

/// Uniform-buffer layout for one material.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialRaw {
    /// rgb + opacity in the alpha channel.
    pub base_color: [f32; 4],
    /// rgb + intensity in the alpha channel.
    pub emissive: [f32; 4],
    /// metalness, roughness, two padding floats for 16-byte alignment.
    pub params: [f32; 4],
}

/// The fixed arena holding the four shared materials.
#[derive(Clone, Debug)]
pub struct MaterialSet {
    materials: [Material; 4],
}

impl MaterialSet {
    /// The four materials of the bust: dark metal body, darker accent trim,
    /// cyan glow and the semi-transparent visor glass.
    pub fn standard() -> Self {
        let body = Material {
            base_color: rgb(0x2d2d2d),
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            metalness: 0.7,
            roughness: 0.3,
            opacity: 1.0,
            transparent: false,
        };
        let accent = Material {
            base_color: rgb(0x1a1a1a),
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            metalness: 0.8,
            roughness: 0.2,
            opacity: 1.0,
            transparent: false,
        };
        let glow = Material {
            base_color: rgb(0x00ffff),
            emissive: rgb(0x00ffff),
            emissive_intensity: 0.8,
            metalness: 0.3,
            roughness: 0.4,
            opacity: 1.0,
            transparent: false,
        };
        let visor = Material {
            base_color: rgb(0x001a1a),
            emissive: rgb(0x003333),
            emissive_intensity: 0.3,
            metalness: 0.9,
            roughness: 0.1,
            opacity: 0.9,
            transparent: true,
        };
        Self {
            materials: [body, accent, glow, visor],
        }
    }

    pub fn get(&self, id: MaterialId) -> &Material {
        &self.materials[id.index()]
    }

    pub fn get_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.index()]
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        MaterialId::ALL
            .iter()
            .map(move |&id| (id, &self.materials[id.index()]))
    }
}

/// Bind group layout for the per-material uniform buffer (group 0).
pub fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("material_bind_group_layout"),
    })
}
