//! The idle animation updater.
//!
//! Invoked once per display tick by the frame scheduler, [`IdleAnimation`]
//! advances a logical-tick accumulator and applies bounded, periodic
//! mutations to the model root and the shared glow material. The animation
//! runs on logical ticks, not measured wall-clock time: every invocation
//! advances by exactly one tick at [`TICK_RATE`] ticks per logical second,
//! so its output is reproducible regardless of actual frame pacing.

use cgmath::Rad;

use crate::data_structures::{
    material::{MaterialId, MaterialSet},
    scene_graph::Node,
};

/// Logical ticks per animation second.
pub const TICK_RATE: f32 = 60.0;

const BOB_AMPLITUDE: f32 = 0.1;
const BOB_FREQUENCY: f32 = 0.5;
const SWAY_AMPLITUDE: f32 = 0.1;
const SWAY_FREQUENCY: f32 = 0.3;
const PULSE_BASE: f32 = 0.6;
const PULSE_AMPLITUDE: f32 = 0.3;
const PULSE_FREQUENCY: f32 = 2.0;

/// Per-tick updater owning the time accumulator.
///
/// The accumulator is an integer tick count; the time is derived by division
/// so 60 ticks from zero land on exactly 1.0 (a running float sum would
/// drift).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleAnimation {
    ticks: u64,
}

impl IdleAnimation {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Accumulated logical time in seconds.
    pub fn time(&self) -> f32 {
        self.ticks as f32 / TICK_RATE
    }

    /// Advance one tick and mutate the root transform and glow material.
    ///
    /// All three mutated quantities are deterministic, continuous, periodic
    /// functions of the accumulated time.
    pub fn tick(&mut self, root: &mut Node, materials: &mut MaterialSet) {
        self.ticks += 1;
        self.apply(root, materials);
    }

    /// Apply the pose for the current accumulated time without advancing.
    pub fn apply(&self, root: &mut Node, materials: &mut MaterialSet) {
        let t = self.time();
        root.transform.position.y = bob(t);
        root.transform.rotation.y = Rad(sway(t));
        materials.get_mut(MaterialId::Glow).emissive_intensity = pulse(t);
    }
}

/// Vertical bob of the model root; range [-0.1, 0.1].
pub fn bob(t: f32) -> f32 {
    BOB_AMPLITUDE * (BOB_FREQUENCY * t).sin()
}

/// Yaw sway of the model root in radians; range [-0.1, 0.1].
pub fn sway(t: f32) -> f32 {
    SWAY_AMPLITUDE * (SWAY_FREQUENCY * t).sin()
}

/// Glow emissive intensity; range [0.3, 0.9], 0.6 at t = 0.
pub fn pulse(t: f32) -> f32 {
    PULSE_BASE + PULSE_AMPLITUDE * (PULSE_FREQUENCY * t).sin()
}
