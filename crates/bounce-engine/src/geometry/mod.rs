//! Point sets and the vertex layout handed to the graphics collaborator.
//!
//! Everything here operates on slices of [`Positioned`] values so the same
//! transforms serve bare positions (`Vec3`) and colored vertices (`Vertex`).

mod point_set;
mod vertex;

pub use point_set::{bounding_box, scale_about, translate, Positioned};
pub use vertex::{triangle, Vertex};
