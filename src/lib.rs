//! protoviz
//!
//! A small retained-mode viewer that builds a procedural protogen bust and
//! renders it with an orbit camera and a looping idle animation. The model
//! is assembled once at startup from fixed constants into an owned scene
//! tree; a per-tick updater then bobs, sways and pulses it for the lifetime
//! of the process.
//!
//! High-level modules
//! - `animation`: the per-tick idle animation updater
//! - `app`: winit event loop, input routing and the frame scheduler
//! - `camera`: camera types, orbit controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/lights
//! - `data_structures`: scene data models (transforms, materials, meshes, tree)
//! - `pipelines`: definitions for the opaque and transparent render pipelines
//! - `protogen`: the model builder with the full character recipe
//! - `render`: GPU scene upload and per-frame buffer writes
//! - `resources`: procedural geometry (primitives, outlines, extrusion)
//!

pub mod animation;
pub mod app;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod protogen;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
