use std::f32::consts::PI;

use protoviz::{
    animation::{self, IdleAnimation, TICK_RATE},
    data_structures::material::MaterialId,
    protogen,
};

#[test]
fn rest_pose_before_the_first_tick() {
    let (mut materials, mut root) = protogen::build();
    let animation = IdleAnimation::new();
    animation.apply(&mut root, &mut materials);

    assert_eq!(animation.time(), 0.0);
    assert_eq!(root.transform.position.y, 0.0);
    assert_eq!(root.transform.rotation.y.0, 0.0);
    assert_eq!(materials.get(MaterialId::Glow).emissive_intensity, 0.6);
}

#[test]
fn sixty_ticks_accumulate_exactly_one_second() {
    let (mut materials, mut root) = protogen::build();
    let mut animation = IdleAnimation::new();
    for _ in 0..60 {
        animation.tick(&mut root, &mut materials);
    }

    assert_eq!(animation.time(), 1.0);
    assert_eq!(
        materials.get(MaterialId::Glow).emissive_intensity,
        0.6 + 0.3 * 2.0f32.sin()
    );
    assert_eq!(root.transform.position.y, 0.1 * 0.5f32.sin());
    assert_eq!(root.transform.rotation.y.0, 0.1 * 0.3f32.sin());
}

#[test]
fn outputs_stay_bounded_over_a_long_run() {
    let (mut materials, mut root) = protogen::build();
    let mut animation = IdleAnimation::new();
    // Ten minutes of ticks.
    for _ in 0..(60 * 600) {
        animation.tick(&mut root, &mut materials);

        let y = root.transform.position.y;
        assert!((-0.1..=0.1).contains(&y), "bob out of range: {}", y);
        let yaw = root.transform.rotation.y.0;
        assert!((-0.1..=0.1).contains(&yaw), "sway out of range: {}", yaw);
        let glow = materials.get(MaterialId::Glow).emissive_intensity;
        assert!((0.3..=0.9).contains(&glow), "pulse out of range: {}", glow);
    }
}

#[test]
fn waveforms_are_periodic() {
    // bob has angular frequency 0.5, so its period is 4 pi; sway 0.3 gives
    // 20 pi / 3 and the pulse 2.0 gives pi.
    for i in 0..50 {
        let t = i as f32 * 0.37;
        assert!((animation::bob(t) - animation::bob(t + 4.0 * PI)).abs() < 1e-4);
        assert!((animation::sway(t) - animation::sway(t + 20.0 * PI / 3.0)).abs() < 1e-4);
        assert!((animation::pulse(t) - animation::pulse(t + PI)).abs() < 1e-4);
    }
}

#[test]
fn same_tick_count_gives_the_same_pose() {
    let (mut materials_a, mut root_a) = protogen::build();
    let (mut materials_b, mut root_b) = protogen::build();
    let mut a = IdleAnimation::new();
    let mut b = IdleAnimation::new();

    for _ in 0..137 {
        a.tick(&mut root_a, &mut materials_a);
    }
    for _ in 0..137 {
        b.tick(&mut root_b, &mut materials_b);
    }

    assert_eq!(root_a.transform.position.y, root_b.transform.position.y);
    assert_eq!(root_a.transform.rotation.y.0, root_b.transform.rotation.y.0);
    assert_eq!(
        materials_a.get(MaterialId::Glow).emissive_intensity,
        materials_b.get(MaterialId::Glow).emissive_intensity
    );
}

#[test]
fn only_the_root_and_the_glow_material_mutate() {
    let (mut materials, mut root) = protogen::build();
    let before_children: Vec<_> = root
        .children()
        .iter()
        .map(|child| (child.transform.position, child.transform.rotation))
        .collect();
    let body_before = *materials.get(MaterialId::Body);
    let accent_before = *materials.get(MaterialId::Accent);
    let visor_before = *materials.get(MaterialId::Visor);

    let mut animation = IdleAnimation::new();
    for _ in 0..500 {
        animation.tick(&mut root, &mut materials);
    }

    for (child, (position, rotation)) in root.children().iter().zip(before_children) {
        assert_eq!(child.transform.position, position);
        assert_eq!(child.transform.rotation, rotation);
    }
    assert_eq!(*materials.get(MaterialId::Body), body_before);
    assert_eq!(*materials.get(MaterialId::Accent), accent_before);
    assert_eq!(*materials.get(MaterialId::Visor), visor_before);
    assert_eq!(animation.time(), 500.0 / TICK_RATE);
}
