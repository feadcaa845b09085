//! The model builder: assembles the protogen bust.
//!
//! [`build`] deterministically constructs the whole character hierarchy from
//! fixed constants. It is pure: it reads nothing, registers nothing with the
//! renderer, and can be invoked any number of times to produce independent,
//! structurally identical trees. Geometry lives on the CPU until the
//! renderer uploads it.

use std::f32::consts::FRAC_PI_2;

use crate::{
    data_structures::{
        material::{MaterialId, MaterialSet},
        scene_graph::Node,
    },
    resources::{
        primitives::{cuboid, cylinder, torus},
        shape::{Bevel, ExtrudeOptions, Outline},
    },
};

/// Which side of the head an ear assembly goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Build the four shared materials and the full bust hierarchy.
pub fn build() -> (MaterialSet, Node) {
    (MaterialSet::standard(), build_model())
}

/// Build the character tree on its own (materials referenced by handle).
pub fn build_model() -> Node {
    let mut root = Node::group();

    // Head block and snout.
    root.add_child(Node::mesh(cuboid(2.0, 1.8, 2.0), MaterialId::Body));
    root.add_child(Node::mesh(cuboid(1.4, 0.8, 1.2), MaterialId::Body).at(0.0, -0.3, 1.2));
    root.add_child(Node::mesh(cuboid(1.0, 0.5, 0.4), MaterialId::Body).at(0.0, -0.35, 1.9));

    // Visor panel and its picture-frame rim.
    root.add_child(Node::mesh(cuboid(1.8, 1.2, 0.1), MaterialId::Visor).at(0.0, 0.1, 1.05));
    let frame = Outline::new([[-1.0, -0.7], [1.0, -0.7], [1.0, 0.7], [-1.0, 0.7]])
        .with_hole([[-0.85, -0.55], [0.85, -0.55], [0.85, 0.55], [-0.85, 0.55]]);
    root.add_child(
        Node::mesh(
            frame.extrude(&ExtrudeOptions {
                depth: 0.15,
                bevel: None,
            }),
            MaterialId::Accent,
        )
        .at(0.0, 0.1, 1.0),
    );

    // Eye chevrons on the visor display.
    let mut eyes = Node::group();
    let left_eye = Outline::new([
        [-0.5, 0.0],
        [-0.2, 0.25],
        [-0.2, 0.15],
        [-0.35, 0.0],
        [-0.2, -0.15],
        [-0.2, -0.25],
    ]);
    eyes.add_child(Node::mesh(left_eye.to_flat_mesh(), MaterialId::Glow).at(-0.25, 0.15, 1.12));
    let right_eye = Outline::new([
        [0.5, 0.0],
        [0.2, 0.25],
        [0.2, 0.15],
        [0.35, 0.0],
        [0.2, -0.15],
        [0.2, -0.25],
    ]);
    eyes.add_child(Node::mesh(right_eye.to_flat_mesh(), MaterialId::Glow).at(0.25, 0.15, 1.12));
    root.add_child(eyes);

    root.add_child(ear(Side::Left));
    root.add_child(ear(Side::Right));

    // Neck with three glow rings stacked along it.
    root.add_child(Node::mesh(cylinder(0.6, 0.7, 0.8, 8), MaterialId::Body).at(0.0, -1.2, 0.0));
    for i in 0..3 {
        root.add_child(
            Node::mesh(torus(0.65, 0.03, 8, 32), MaterialId::Glow)
                .at(0.0, -0.95 - i as f32 * 0.2, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        );
    }

    // Cheek accents on the outer faces of the head.
    root.add_child(Node::mesh(cuboid(0.1, 0.4, 0.6), MaterialId::Glow).at(-1.05, 0.0, 0.5));
    root.add_child(Node::mesh(cuboid(0.1, 0.4, 0.6), MaterialId::Glow).at(1.05, 0.0, 0.5));

    root
}

/// Build one ear assembly: beveled triangular solid plus inner glow panel.
///
/// The two sides are geometric mirrors in rotation (z = ±0.2, shared x tilt
/// -0.3). The x offsets are asymmetric on purpose (-0.9 left, 0.5 right),
/// not equal-magnitude mirrors.
pub fn ear(side: Side) -> Node {
    let mut group = Node::group();

    let shell = Outline::new([[0.0, 0.0], [0.4, 0.0], [0.2, 1.0]]);
    group.add_child(Node::mesh(
        shell.extrude(&ExtrudeOptions {
            depth: 0.3,
            bevel: Some(Bevel {
                thickness: 0.05,
                size: 0.05,
            }),
        }),
        MaterialId::Body,
    ));

    let glow = Outline::new([[0.1, 0.15], [0.3, 0.15], [0.2, 0.7]]);
    group.add_child(Node::mesh(glow.to_flat_mesh(), MaterialId::Glow).at(0.0, 0.0, 0.31));

    let x = match side {
        Side::Left => -0.9,
        Side::Right => 0.5,
    };
    let z_rotation = match side {
        Side::Left => 0.2,
        Side::Right => -0.2,
    };
    group.at(x, 0.7, -0.3).rotated(-0.3, 0.0, z_rotation)
}
