//! Procedural geometry construction: solid primitives and 2D outlines.

pub mod primitives;
pub mod shape;
