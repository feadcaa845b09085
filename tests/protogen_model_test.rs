use protoviz::{
    data_structures::material::{MaterialId, MaterialSet},
    protogen::{self, Side},
};

#[test]
fn the_bust_has_the_expected_top_level_parts() {
    let root = protogen::build_model();
    // head, snout, snout tip, visor, visor frame, eye group, two ears,
    // neck, three rings, two cheeks
    assert_eq!(root.children().len(), 14);

    let mut surfaces = 0;
    root.visit_surfaces(&mut |_, _, _| surfaces += 1);
    assert_eq!(surfaces, 17);

    // Root, its 14 children, 2 eye meshes and 2 x 2 ear children.
    let mut nodes = 0;
    root.visit(&mut |_| nodes += 1);
    assert_eq!(nodes, 21);
}

#[test]
fn exactly_four_shared_materials() {
    let (materials, _) = protogen::build();
    assert_eq!(materials.len(), 4);
    assert_eq!(MaterialId::ALL.len(), 4);

    // The glow material is the cyan emissive one every glowing part shares.
    let glow = materials.get(MaterialId::Glow);
    assert_eq!(glow.base_color, [0.0, 1.0, 1.0]);
    assert_eq!(glow.emissive, [0.0, 1.0, 1.0]);

    // Only the visor renders through the transparent pipeline.
    let transparent: Vec<_> = materials
        .iter()
        .filter(|(_, m)| m.transparent)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(transparent, vec![MaterialId::Visor]);
}

#[test]
fn ears_are_mirrored_assemblies() {
    let left = protogen::ear(Side::Left);
    let right = protogen::ear(Side::Right);

    // Each assembly is a group of the beveled shell plus the glow panel.
    assert_eq!(left.children().len(), 2);
    assert_eq!(right.children().len(), 2);
    assert!(left.surface().is_none());

    // Mirrored in roll, shared forward tilt, asymmetric x offsets.
    assert_eq!(left.transform.rotation.z.0, -right.transform.rotation.z.0);
    assert_eq!(left.transform.rotation.x.0, -0.3);
    assert_eq!(right.transform.rotation.x.0, -0.3);
    assert_eq!(left.transform.position.x, -0.9);
    assert_eq!(right.transform.position.x, 0.5);
    assert_eq!(left.transform.position.y, right.transform.position.y);
    assert_eq!(left.transform.position.z, right.transform.position.z);

    // Shell and panel geometry are identical on both sides.
    let shells = (left.children()[0].surface(), right.children()[0].surface());
    let (Some(l), Some(r)) = shells else {
        panic!("ear shells must carry geometry")
    };
    assert_eq!(l.geometry.vertices.len(), r.geometry.vertices.len());
    assert_eq!(l.geometry.indices, r.geometry.indices);
}

#[test]
fn three_glow_rings_stack_down_the_neck() {
    let root = protogen::build_model();
    let rings: Vec<_> = root
        .children()
        .iter()
        .filter(|node| {
            node.surface()
                .is_some_and(|s| s.material == MaterialId::Glow)
                && node.transform.position.y < -0.5
        })
        .collect();
    assert_eq!(rings.len(), 3);
    let mut heights: Vec<f32> = rings.iter().map(|n| n.transform.position.y).collect();
    heights.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(heights, vec![-0.95, -1.15, -1.35]);
    // All rings lie flat: rotated a quarter turn around x.
    for ring in rings {
        assert!((ring.transform.rotation.x.0 - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}

#[test]
fn cheek_accents_sit_on_both_sides() {
    let root = protogen::build_model();
    let cheeks: Vec<f32> = root
        .children()
        .iter()
        .filter(|node| {
            node.surface()
                .is_some_and(|s| s.material == MaterialId::Glow)
                && node.transform.position.x.abs() > 1.0
        })
        .map(|node| node.transform.position.x)
        .collect();
    assert_eq!(cheeks.len(), 2);
    assert!(cheeks.contains(&-1.05) && cheeks.contains(&1.05));
}

#[test]
fn building_twice_yields_identical_trees() {
    let a = protogen::build_model();
    let b = protogen::build_model();

    let mut worlds_a = Vec::new();
    a.visit_surfaces(&mut |surface, world, _| {
        worlds_a.push((surface.geometry.vertices.len(), surface.material, world));
    });
    let mut worlds_b = Vec::new();
    b.visit_surfaces(&mut |surface, world, _| {
        worlds_b.push((surface.geometry.vertices.len(), surface.material, world));
    });

    assert_eq!(worlds_a.len(), worlds_b.len());
    for ((len_a, mat_a, world_a), (len_b, mat_b, world_b)) in worlds_a.iter().zip(&worlds_b) {
        assert_eq!(len_a, len_b);
        assert_eq!(mat_a, mat_b);
        assert_eq!(world_a, world_b);
    }
}

#[test]
fn builder_does_not_touch_the_material_set() {
    // Materials and tree are independent products; building the tree twice
    // with one set must leave the set at its standard values.
    let set = MaterialSet::standard();
    let _ = protogen::build_model();
    let fresh = MaterialSet::standard();
    for (id, material) in set.iter() {
        assert_eq!(material, fresh.get(id));
    }
}
