//! Closed 2D outlines and their conversion to 3D solids.
//!
//! An [`Outline`] is a closed polygon, optionally with interior holes, that
//! is immutable once defined. It becomes renderable geometry either as a
//! flat panel ([`Outline::to_flat_mesh`]) or as an extruded solid with an
//! optional bevel ([`Outline::extrude`]). Triangulation is plain ear
//! clipping; holes are merged into the outer ring with bridge edges first.

use cgmath::{InnerSpace, Vector2, Vector3};
use log::warn;

use crate::data_structures::mesh::MeshData;

const EPS: f32 = 1e-6;

/// A closed 2D polygon with optional interior hole polygons.
///
/// Winding of the input does not matter; contours are normalized during
/// triangulation (outer counter-clockwise, holes clockwise).
#[derive(Clone, Debug)]
pub struct Outline {
    points: Vec<Vector2<f32>>,
    holes: Vec<Vec<Vector2<f32>>>,
}

/// Extrusion parameters: sweep depth along +Z plus an optional bevel.
#[derive(Clone, Copy, Debug)]
pub struct ExtrudeOptions {
    pub depth: f32,
    pub bevel: Option<Bevel>,
}

/// A single bevel segment on each end of an extrusion.
///
/// `thickness` extends along Z beyond the end faces, `size` is the contour
/// inset of the beveled rim.
#[derive(Clone, Copy, Debug)]
pub struct Bevel {
    pub thickness: f32,
    pub size: f32,
}

impl Outline {
    pub fn new(points: impl IntoIterator<Item = [f32; 2]>) -> Self {
        Self {
            points: clean_contour(points),
            holes: Vec::new(),
        }
    }

    /// Add an interior hole (builder style).
    pub fn with_hole(mut self, points: impl IntoIterator<Item = [f32; 2]>) -> Self {
        self.holes.push(clean_contour(points));
        self
    }

    pub fn points(&self) -> &[Vector2<f32>] {
        &self.points
    }

    pub fn holes(&self) -> &[Vec<Vector2<f32>>] {
        &self.holes
    }

    /// Enclosed area: outer contour minus holes.
    pub fn area(&self) -> f32 {
        let outer = signed_area(&self.points).abs();
        let holes: f32 = self.holes.iter().map(|h| signed_area(h).abs()).sum();
        outer - holes
    }

    /// Triangulate into a shared vertex list plus triangle indices.
    ///
    /// The vertex list is the outer contour followed by all hole contours;
    /// the triangle winding is counter-clockwise.
    pub fn triangulate(&self) -> (Vec<Vector2<f32>>, Vec<u32>) {
        let mut verts: Vec<Vector2<f32>> = Vec::new();

        let mut outer = self.points.clone();
        if signed_area(&outer) < 0.0 {
            outer.reverse();
        }
        let mut ring: Vec<u32> = (0..outer.len() as u32).collect();
        verts.extend(outer);

        // Holes are bridged largest-x first so already-inserted bridges do
        // not occlude later ones.
        let mut holes: Vec<Vec<Vector2<f32>>> = self
            .holes
            .iter()
            .map(|hole| {
                let mut hole = hole.clone();
                if signed_area(&hole) > 0.0 {
                    hole.reverse();
                }
                hole
            })
            .collect();
        holes.sort_by(|a, b| {
            let ax = a.iter().map(|p| p.x).fold(f32::MIN, f32::max);
            let bx = b.iter().map(|p| p.x).fold(f32::MIN, f32::max);
            bx.partial_cmp(&ax).unwrap_or(std::cmp::Ordering::Equal)
        });
        for hole in holes {
            let base = verts.len() as u32;
            verts.extend(hole.iter().cloned());
            let hole_indices: Vec<u32> = (0..hole.len() as u32).map(|i| base + i).collect();
            ring = merge_hole(&verts, ring, hole_indices);
        }

        let indices = ear_clip(&verts, ring);
        (verts, indices)
    }

    /// A flat panel in the XY plane at z = 0 facing +Z.
    pub fn to_flat_mesh(&self) -> MeshData {
        let (verts, indices) = self.triangulate();
        let mut mesh = MeshData::new();
        for p in &verts {
            mesh.push_vertex([p.x, p.y, 0.0], [0.0, 0.0, 1.0]);
        }
        mesh.indices = indices;
        mesh
    }

    /// Sweep the outline from z = 0 to z = `depth`, capping both ends.
    ///
    /// With a bevel, an extra inset rim extends `thickness` beyond each end
    /// face and the caps move onto the rims.
    pub fn extrude(&self, options: &ExtrudeOptions) -> MeshData {
        let (cap_verts, cap_indices) = self.triangulate();
        let mut mesh = MeshData::new();

        let contours = self.oriented_contours();

        // Side walls between the two end faces, one flat-shaded quad per edge.
        for contour in &contours {
            for (p, q) in edges(contour) {
                push_wall(&mut mesh, p, q, 0.0, options.depth);
            }
        }

        let (mut back_z, mut front_z) = (0.0, options.depth);
        let mut inset_pairs: Vec<(Vector2<f32>, Vector2<f32>)> = Vec::new();

        if let Some(bevel) = options.bevel {
            // Bevel rims: contour inset by `size`, pushed `thickness` out
            // along Z past each end face.
            for contour in &contours {
                let inset = inset_contour(contour, bevel.size);
                for ((p, q), (ip, iq)) in edges(contour).zip(edges(&inset)) {
                    push_bevel_quad(&mut mesh, p, q, front_z, ip, iq, front_z + bevel.thickness);
                    push_bevel_quad(&mut mesh, ip, iq, back_z - bevel.thickness, p, q, back_z);
                }
                inset_pairs.extend(contour.iter().cloned().zip(inset));
            }
            back_z -= bevel.thickness;
            front_z += bevel.thickness;
        }

        // The caps reuse the outline triangulation; with a bevel each cap
        // vertex is remapped to its inset rim position. The inset is small
        // and uniform, so the triangulation stays valid for the rim.
        let cap_position = |p: Vector2<f32>| -> Vector2<f32> {
            inset_pairs
                .iter()
                .find(|(orig, _)| (orig.x - p.x).abs() < EPS && (orig.y - p.y).abs() < EPS)
                .map(|(_, inset)| *inset)
                .unwrap_or(p)
        };
        let front_base = mesh.vertices.len() as u32;
        for p in &cap_verts {
            let p = cap_position(*p);
            mesh.push_vertex([p.x, p.y, front_z], [0.0, 0.0, 1.0]);
        }
        for tri in cap_indices.chunks(3) {
            mesh.push_triangle(front_base + tri[0], front_base + tri[1], front_base + tri[2]);
        }
        let back_base = mesh.vertices.len() as u32;
        for p in &cap_verts {
            let p = cap_position(*p);
            mesh.push_vertex([p.x, p.y, back_z], [0.0, 0.0, -1.0]);
        }
        for tri in cap_indices.chunks(3) {
            mesh.push_triangle(back_base + tri[0], back_base + tri[2], back_base + tri[1]);
        }

        mesh
    }

    /// Contours with normalized winding: outer CCW, holes CW.
    fn oriented_contours(&self) -> Vec<Vec<Vector2<f32>>> {
        let mut contours = Vec::with_capacity(1 + self.holes.len());
        let mut outer = self.points.clone();
        if signed_area(&outer) < 0.0 {
            outer.reverse();
        }
        contours.push(outer);
        for hole in &self.holes {
            let mut hole = hole.clone();
            if signed_area(&hole) > 0.0 {
                hole.reverse();
            }
            contours.push(hole);
        }
        contours
    }
}

fn clean_contour(points: impl IntoIterator<Item = [f32; 2]>) -> Vec<Vector2<f32>> {
    let mut contour: Vec<Vector2<f32>> = points
        .into_iter()
        .map(|[x, y]| Vector2::new(x, y))
        .collect();
    // Recipes often close the loop explicitly; drop the duplicate endpoint.
    if contour.len() > 1 {
        let first = contour[0];
        let last = contour[contour.len() - 1];
        if (first.x - last.x).abs() < EPS && (first.y - last.y).abs() < EPS {
            contour.pop();
        }
    }
    contour
}

/// Twice the signed area is the shoelace sum; positive means counter-clockwise.
pub fn signed_area(points: &[Vector2<f32>]) -> f32 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

fn cross(o: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn point_in_triangle(p: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    // Strictly inside, independent of triangle winding.
    (d1 > EPS && d2 > EPS && d3 > EPS) || (d1 < -EPS && d2 < -EPS && d3 < -EPS)
}

/// Merge one hole contour into the outer ring with a bridge edge pair.
///
/// Standard visibility bridge: from the hole vertex with the largest x, cast
/// a ray towards +x, find the nearest crossed ring edge and connect to a
/// visible vertex of that edge (falling back to the reflex vertex closest to
/// the ray when one blocks the candidate).
fn merge_hole(verts: &[Vector2<f32>], ring: Vec<u32>, hole: Vec<u32>) -> Vec<u32> {
    let m_pos = hole
        .iter()
        .enumerate()
        .max_by(|a, b| {
            verts[*a.1 as usize]
                .x
                .partial_cmp(&verts[*b.1 as usize].x)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    let m = verts[hole[m_pos] as usize];

    // Nearest +x crossing of the ray with a ring edge.
    let mut best: Option<(usize, f32)> = None;
    for i in 0..ring.len() {
        let a = verts[ring[i] as usize];
        let b = verts[ring[(i + 1) % ring.len()] as usize];
        if (a.y - b.y).abs() < EPS {
            continue;
        }
        if (a.y <= m.y && b.y >= m.y) || (b.y <= m.y && a.y >= m.y) {
            let t = (m.y - a.y) / (b.y - a.y);
            let ix = a.x + t * (b.x - a.x);
            if ix >= m.x - EPS && best.map_or(true, |(_, bx)| ix < bx) {
                best = Some((i, ix));
            }
        }
    }
    let Some((edge_idx, ix)) = best else {
        warn!("hole lies outside its outline and was skipped during triangulation");
        return ring;
    };

    // Candidate visible vertex: the crossed edge endpoint with the larger x.
    let (e0, e1) = (edge_idx, (edge_idx + 1) % ring.len());
    let mut p_pos = if verts[ring[e0] as usize].x > verts[ring[e1] as usize].x {
        e0
    } else {
        e1
    };
    let intersection = Vector2::new(ix, m.y);

    // A reflex ring vertex inside triangle (m, intersection, candidate)
    // occludes the candidate; take the occluder closest in angle to the ray.
    let p = verts[ring[p_pos] as usize];
    let mut best_block: Option<(usize, f32)> = None;
    for i in 0..ring.len() {
        if i == p_pos {
            continue;
        }
        let prev = verts[ring[(i + ring.len() - 1) % ring.len()] as usize];
        let cur = verts[ring[i] as usize];
        let next = verts[ring[(i + 1) % ring.len()] as usize];
        let reflex = cross(prev, cur, next) < -EPS;
        if reflex && point_in_triangle(cur, m, intersection, p) {
            let dx = cur.x - m.x;
            let dy = (cur.y - m.y).abs();
            let tangent = if dx.abs() < EPS { f32::MAX } else { dy / dx };
            if best_block.map_or(true, |(_, t)| tangent < t) {
                best_block = Some((i, tangent));
            }
        }
    }
    if let Some((blocker, _)) = best_block {
        p_pos = blocker;
    }

    // Splice: ... P, M, hole from M around, M, P, ...
    let mut merged = Vec::with_capacity(ring.len() + hole.len() + 2);
    merged.extend_from_slice(&ring[..=p_pos]);
    for k in 0..hole.len() {
        merged.push(hole[(m_pos + k) % hole.len()]);
    }
    merged.push(hole[m_pos]);
    merged.push(ring[p_pos]);
    merged.extend_from_slice(&ring[p_pos + 1..]);
    merged
}

/// Ear-clipping triangulation of a simple (bridged) counter-clockwise ring.
fn ear_clip(verts: &[Vector2<f32>], mut ring: Vec<u32>) -> Vec<u32> {
    let mut indices = Vec::with_capacity((ring.len().saturating_sub(2)) * 3);
    let mut stall = 0usize;
    while ring.len() > 3 {
        let n = ring.len();
        let mut clipped = false;
        for i in 0..n {
            let prev = verts[ring[(i + n - 1) % n] as usize];
            let cur = verts[ring[i] as usize];
            let next = verts[ring[(i + 1) % n] as usize];
            if cross(prev, cur, next) <= EPS {
                continue;
            }
            let blocked = ring.iter().enumerate().any(|(j, &v)| {
                if j == (i + n - 1) % n || j == i || j == (i + 1) % n {
                    return false;
                }
                let p = verts[v as usize];
                // Bridge duplicates share a position with a corner; they do
                // not block the ear.
                let is_corner = [prev, cur, next]
                    .iter()
                    .any(|c| (c.x - p.x).abs() < EPS && (c.y - p.y).abs() < EPS);
                !is_corner && point_in_triangle(p, prev, cur, next)
            });
            if !blocked {
                indices.push(ring[(i + n - 1) % n]);
                indices.push(ring[i]);
                indices.push(ring[(i + 1) % n]);
                ring.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Degenerate leftovers (collinear runs); drop the flattest vertex
            // rather than spinning forever.
            stall += 1;
            if stall > 1 {
                warn!("ear clipping stalled with {} vertices left", ring.len());
                break;
            }
            ring.remove(0);
        } else {
            stall = 0;
        }
    }
    if ring.len() == 3 {
        indices.extend_from_slice(&ring);
    }
    indices
}

fn edges(contour: &[Vector2<f32>]) -> impl Iterator<Item = (Vector2<f32>, Vector2<f32>)> + '_ {
    (0..contour.len()).map(move |i| (contour[i], contour[(i + 1) % contour.len()]))
}

/// One flat-shaded wall quad between the two end faces of an extrusion.
fn push_wall(mesh: &mut MeshData, p: Vector2<f32>, q: Vector2<f32>, z0: f32, z1: f32) {
    let d = Vector2::new(q.x - p.x, q.y - p.y);
    let len = (d.x * d.x + d.y * d.y).sqrt().max(EPS);
    // Outward normal of a CCW contour edge (holes are CW, which flips it
    // towards the hole interior as required).
    let normal = [d.y / len, -d.x / len, 0.0];
    let a = mesh.push_vertex([p.x, p.y, z0], normal);
    let b = mesh.push_vertex([q.x, q.y, z0], normal);
    let c = mesh.push_vertex([q.x, q.y, z1], normal);
    let d = mesh.push_vertex([p.x, p.y, z1], normal);
    mesh.push_quad(a, b, c, d);
}

/// One slanted quad joining an end face contour to its beveled rim.
fn push_bevel_quad(
    mesh: &mut MeshData,
    p: Vector2<f32>,
    q: Vector2<f32>,
    z_pq: f32,
    ip: Vector2<f32>,
    iq: Vector2<f32>,
    z_i: f32,
) {
    // Flat normal straight from the quad plane.
    let p3 = Vector3::new(p.x, p.y, z_pq);
    let q3 = Vector3::new(q.x, q.y, z_pq);
    let iq3 = Vector3::new(iq.x, iq.y, z_i);
    let face = (q3 - p3).cross(iq3 - p3);
    let normal: [f32; 3] = if face.magnitude2() > 0.0 {
        face.normalize().into()
    } else {
        [0.0, 0.0, 1.0]
    };
    let a = mesh.push_vertex([p.x, p.y, z_pq], normal);
    let b = mesh.push_vertex([q.x, q.y, z_pq], normal);
    let c = mesh.push_vertex([iq.x, iq.y, z_i], normal);
    let d = mesh.push_vertex([ip.x, ip.y, z_i], normal);
    mesh.push_quad(a, b, c, d);
}

/// Move every contour vertex inward along its angle-bisector normal.
fn inset_contour(contour: &[Vector2<f32>], amount: f32) -> Vec<Vector2<f32>> {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let prev = contour[(i + n - 1) % n];
            let cur = contour[i];
            let next = contour[(i + 1) % n];
            cur + bisector_inward(prev, cur, next) * amount
        })
        .collect()
}

fn bisector_inward(prev: Vector2<f32>, cur: Vector2<f32>, next: Vector2<f32>) -> Vector2<f32> {
    let norm = |v: Vector2<f32>| {
        let len = (v.x * v.x + v.y * v.y).sqrt().max(EPS);
        Vector2::new(v.x / len, v.y / len)
    };
    let e0 = norm(cur - prev);
    let e1 = norm(next - cur);
    // Inward normals of the two incident edges for a CCW contour.
    let n0 = Vector2::new(-e0.y, e0.x);
    let n1 = Vector2::new(-e1.y, e1.x);
    norm(n0 + n1)
}
