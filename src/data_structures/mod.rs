//! Scene data models: transforms, materials, meshes and the node tree.
//!
//! - `material` holds the shared material arena and GPU uniform layout
//! - `mesh` contains CPU-side mesh data and the shared vertex layout
//! - `scene_graph` enables hierarchical scene organization
//! - `texture` contains the GPU depth texture wrapper
//! - `transform` holds per-node transformation data

pub mod material;
pub mod mesh;
pub mod scene_graph;
pub mod texture;
pub mod transform;
