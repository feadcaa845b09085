use protoviz::{
    Vector2,
    resources::{
        primitives::{cuboid, cylinder, torus},
        shape::{Bevel, ExtrudeOptions, Outline, signed_area},
    },
};

fn triangulated_area(verts: &[Vector2<f32>], indices: &[u32]) -> f32 {
    indices
        .chunks(3)
        .map(|tri| {
            let a = verts[tri[0] as usize];
            let b = verts[tri[1] as usize];
            let c = verts[tri[2] as usize];
            ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) / 2.0
        })
        .sum()
}

#[test]
fn triangle_outline_is_a_single_ear() {
    let outline = Outline::new([[0.0, 0.0], [0.4, 0.0], [0.2, 1.0]]);
    let (verts, indices) = outline.triangulate();
    assert_eq!(verts.len(), 3);
    assert_eq!(indices.len(), 3);
    assert!((triangulated_area(&verts, &indices) - 0.2).abs() < 1e-5);
}

#[test]
fn winding_is_normalized_to_counter_clockwise() {
    // Same square, one defined clockwise.
    let ccw = Outline::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let cw = Outline::new([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    for outline in [ccw, cw] {
        let (verts, indices) = outline.triangulate();
        assert_eq!(indices.len(), 6);
        // Positive area per triangle means CCW output triangles.
        for tri in indices.chunks(3) {
            let area = triangulated_area(&verts, tri);
            assert!(area > 0.0, "clockwise triangle emitted");
        }
    }
}

#[test]
fn duplicated_closing_point_is_dropped() {
    let closed = Outline::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
    assert_eq!(closed.points().len(), 3);
}

#[test]
fn concave_chevron_triangulates_with_full_area() {
    // The eye chevron from the visor display.
    let chevron = Outline::new([
        [-0.5, 0.0],
        [-0.2, 0.25],
        [-0.2, 0.15],
        [-0.35, 0.0],
        [-0.2, -0.15],
        [-0.2, -0.25],
    ]);
    let expected = signed_area(chevron.points()).abs();
    let (verts, indices) = chevron.triangulate();
    assert_eq!(indices.len(), (chevron.points().len() - 2) * 3);
    assert!((triangulated_area(&verts, &indices) - expected).abs() < 1e-5);
}

#[test]
fn frame_with_hole_keeps_the_ring_area() {
    let frame = Outline::new([[-1.0, -0.7], [1.0, -0.7], [1.0, 0.7], [-1.0, 0.7]])
        .with_hole([[-0.85, -0.55], [0.85, -0.55], [0.85, 0.55], [-0.85, 0.55]]);
    let expected = 2.0 * 1.4 - 1.7 * 1.1;
    assert_eq!(frame.holes().len(), 1);
    assert!((frame.area() - expected).abs() < 1e-5);

    let (verts, indices) = frame.triangulate();
    assert!((triangulated_area(&verts, &indices) - expected).abs() < 1e-4);
    for tri in indices.chunks(3) {
        assert!(triangulated_area(&verts, tri) > -1e-6);
    }
}

#[test]
fn flat_mesh_faces_forward() {
    let mesh = Outline::new([[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]).to_flat_mesh();
    for vertex in &mesh.vertices {
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertex.position[2], 0.0);
    }
}

#[test]
fn plain_extrusion_spans_zero_to_depth() {
    let mesh = Outline::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).extrude(
        &ExtrudeOptions {
            depth: 0.3,
            bevel: None,
        },
    );
    // 4 wall quads plus two 2-triangle caps.
    assert_eq!(mesh.triangle_count(), 4 * 2 + 2 * 2);
    let (min_z, max_z) = z_range(&mesh.vertices);
    assert!((min_z - 0.0).abs() < 1e-6);
    assert!((max_z - 0.3).abs() < 1e-6);
}

#[test]
fn beveled_extrusion_extends_past_the_end_faces() {
    let mesh = Outline::new([[0.0, 0.0], [0.4, 0.0], [0.2, 1.0]]).extrude(&ExtrudeOptions {
        depth: 0.3,
        bevel: Some(Bevel {
            thickness: 0.05,
            size: 0.05,
        }),
    });
    let (min_z, max_z) = z_range(&mesh.vertices);
    assert!((min_z + 0.05).abs() < 1e-6);
    assert!((max_z - 0.35).abs() < 1e-6);
    // Walls, two bevel rims and two caps.
    assert_eq!(mesh.triangle_count(), 3 * 2 + 2 * 3 * 2 + 2 * 1);
}

#[test]
fn extrusion_normals_point_outward_from_the_walls() {
    let mesh = Outline::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).extrude(
        &ExtrudeOptions {
            depth: 0.5,
            bevel: None,
        },
    );
    // The bottom edge (y = 0) wall must face -y.
    let bottom_wall: Vec<_> = mesh
        .vertices
        .iter()
        .filter(|v| v.position[1] == 0.0 && v.normal[0] == 0.0 && v.normal[2] == 0.0)
        .collect();
    assert!(!bottom_wall.is_empty());
    for vertex in bottom_wall {
        assert_eq!(vertex.normal, [0.0, -1.0, 0.0]);
    }
}

#[test]
fn cuboid_counts_and_extents() {
    let mesh = cuboid(2.0, 1.8, 2.0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    for vertex in &mesh.vertices {
        assert!(vertex.position[0].abs() <= 1.0 + 1e-6);
        assert!(vertex.position[1].abs() <= 0.9 + 1e-6);
        assert!(vertex.position[2].abs() <= 1.0 + 1e-6);
    }
}

#[test]
fn tapered_cylinder_counts_and_radii() {
    let segments = 8;
    let mesh = cylinder(0.6, 0.7, 0.8, segments);
    // Side quads plus two fans.
    assert_eq!(mesh.triangle_count(), (segments * 2 + segments * 2) as usize);
    let (min_z, max_z) = (
        mesh.vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min),
        mesh.vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max),
    );
    assert!((min_z + 0.4).abs() < 1e-6);
    assert!((max_z - 0.4).abs() < 1e-6);
    // Bottom ring is the wider one.
    let max_radius = mesh
        .vertices
        .iter()
        .map(|v| (v.position[0].powi(2) + v.position[2].powi(2)).sqrt())
        .fold(f32::MIN, f32::max);
    assert!((max_radius - 0.7).abs() < 1e-5);
}

#[test]
fn torus_vertices_stay_on_the_tube() {
    let (radius, tube) = (0.65, 0.03);
    let mesh = torus(radius, tube, 8, 32);
    assert_eq!(mesh.triangle_count(), 8 * 32 * 2);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        let ring_distance = (x * x + y * y).sqrt() - radius;
        let tube_distance = (ring_distance * ring_distance + z * z).sqrt();
        assert!((tube_distance - tube).abs() < 1e-5);
    }
}

#[test]
fn primitive_normals_are_unit_length() {
    for mesh in [
        cuboid(1.0, 1.0, 1.0),
        cylinder(0.5, 0.5, 1.0, 8),
        torus(0.65, 0.03, 8, 32),
    ] {
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.normal;
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 1.0).abs() < 1e-4);
        }
    }
}

fn z_range(vertices: &[protoviz::data_structures::mesh::MeshVertex]) -> (f32, f32) {
    let min = vertices
        .iter()
        .map(|v| v.position[2])
        .fold(f32::MAX, f32::min);
    let max = vertices
        .iter()
        .map(|v| v.position[2])
        .fold(f32::MIN, f32::max);
    (min, max)
}
