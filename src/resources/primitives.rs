//! Procedural solid primitives.
//!
//! Generators for the box, tapered cylinder and torus solids the bust is
//! assembled from. All meshes are centered on the local origin with
//! counter-clockwise front faces; dimensions mirror the character recipe's
//! constants, so the parameters are plain widths/radii rather than builders.

use std::f32::consts::TAU;

use cgmath::{InnerSpace, Vector3};

use crate::data_structures::mesh::MeshData;

/// An axis-aligned box of the given extents, flat-shaded per face.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut mesh = MeshData::new();

    // Each face gets its own four vertices so the normals stay hard.
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-hw, -hh, hd],
                [hw, -hh, hd],
                [hw, hh, hd],
                [-hw, hh, hd],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hw, -hh, -hd],
                [-hw, -hh, -hd],
                [-hw, hh, -hd],
                [hw, hh, -hd],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [hw, -hh, hd],
                [hw, -hh, -hd],
                [hw, hh, -hd],
                [hw, hh, hd],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hw, -hh, -hd],
                [-hw, -hh, hd],
                [-hw, hh, hd],
                [-hw, hh, -hd],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hw, hh, hd],
                [hw, hh, hd],
                [hw, hh, -hd],
                [-hw, hh, -hd],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hw, -hh, -hd],
                [hw, -hh, -hd],
                [hw, -hh, hd],
                [-hw, -hh, hd],
            ],
        ),
    ];
    for (normal, corners) in faces {
        let a = mesh.push_vertex(corners[0], normal);
        let b = mesh.push_vertex(corners[1], normal);
        let c = mesh.push_vertex(corners[2], normal);
        let d = mesh.push_vertex(corners[3], normal);
        mesh.push_quad(a, b, c, d);
    }
    mesh
}

/// A capped cylinder along Y, optionally tapered (different end radii).
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::new();
    let half = height / 2.0;
    // Y component of the side normal accounts for the taper slope.
    let slope = (radius_bottom - radius_top) / height;

    let ring = |radius: f32, y: f32, i: u32| {
        let theta = i as f32 / segments as f32 * TAU;
        [radius * theta.sin(), y, radius * theta.cos()]
    };

    // Side wall with shared, smoothed normals per seam column.
    let mut bottom = Vec::with_capacity(segments as usize + 1);
    let mut top = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let normal: [f32; 3] = Vector3::new(theta.sin(), slope, theta.cos())
            .normalize()
            .into();
        bottom.push(mesh.push_vertex(ring(radius_bottom, -half, i), normal));
        top.push(mesh.push_vertex(ring(radius_top, half, i), normal));
    }
    for i in 0..segments as usize {
        mesh.push_quad(bottom[i], bottom[i + 1], top[i + 1], top[i]);
    }

    // Caps as triangle fans.
    let top_center = mesh.push_vertex([0.0, half, 0.0], [0.0, 1.0, 0.0]);
    let bottom_center = mesh.push_vertex([0.0, -half, 0.0], [0.0, -1.0, 0.0]);
    let mut top_rim = Vec::with_capacity(segments as usize + 1);
    let mut bottom_rim = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        top_rim.push(mesh.push_vertex(ring(radius_top, half, i), [0.0, 1.0, 0.0]));
        bottom_rim.push(mesh.push_vertex(ring(radius_bottom, -half, i), [0.0, -1.0, 0.0]));
    }
    for i in 0..segments as usize {
        mesh.push_triangle(top_center, top_rim[i], top_rim[i + 1]);
        mesh.push_triangle(bottom_center, bottom_rim[i + 1], bottom_rim[i]);
    }
    mesh
}

/// A torus in the XY plane around the Z axis, smooth-shaded.
///
/// `radius` is the distance from the center to the tube center, `tube` the
/// tube radius.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::new();
    let cols = tubular_segments + 1;

    for j in 0..=radial_segments {
        let phi = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let theta = i as f32 / tubular_segments as f32 * TAU;
            let center = Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0);
            let position = Vector3::new(
                (radius + tube * phi.cos()) * theta.cos(),
                (radius + tube * phi.cos()) * theta.sin(),
                tube * phi.sin(),
            );
            let normal: [f32; 3] = (position - center).normalize().into();
            mesh.push_vertex(position.into(), normal);
        }
    }
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * cols + i;
            let b = j * cols + i + 1;
            let c = (j + 1) * cols + i + 1;
            let d = (j + 1) * cols + i;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}
