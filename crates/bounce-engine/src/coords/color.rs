use bytemuck::{Pod, Zeroable};

/// Linear RGBA color carried per vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const RED: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: ColorRgba = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: ColorRgba = ColorRgba::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
