use bytemuck::{Pod, Zeroable};

use super::Positioned;
use crate::coords::{ColorRgba, Vec3};

/// Position + color, laid out exactly as uploaded.
///
/// Byte layout: 12 bytes of position (x, y, z) followed by 16 bytes of RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub color: ColorRgba,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec3, color: ColorRgba) -> Self {
        Self { position, color }
    }

    /// Byte offset of `color` within a vertex.
    pub const COLOR_OFFSET: usize = std::mem::size_of::<Vec3>();

    /// Stride between consecutive vertices in an uploaded buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

impl Positioned for Vertex {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }
}

/// The demo triangle: red bottom-left, green bottom-right, blue apex.
pub fn triangle() -> [Vertex; 3] {
    [
        Vertex::new(Vec3::xy(-0.5, 0.0), ColorRgba::RED),
        Vertex::new(Vec3::xy(0.5, 0.0), ColorRgba::GREEN),
        Vertex::new(Vec3::xy(0.0, 1.0), ColorRgba::BLUE),
    ]
}
