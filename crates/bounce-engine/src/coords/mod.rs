//! Coordinate and geometry value types shared by the animator and the upload path.
//!
//! Canonical space is normalized device coordinates:
//! - origin at the center of the window
//! - +X right, +Y up
//! - the visible area spans [-1, 1] on both axes

mod bounds;
mod color;
pub mod vec3;

pub use bounds::Bounds;
pub use color::ColorRgba;
pub use vec3::Vec3;
