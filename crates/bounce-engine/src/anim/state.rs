use crate::coords::Vec3;

/// Mutable animation state carried from frame to frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationState {
    /// Per-frame translation. Only x and y take part in wall reflection.
    pub direction: Vec3,
    /// Scale factor applied this frame.
    pub multiplier: f32,
    /// Running product of every multiplier applied so far.
    pub scale: f32,
}

impl AnimationState {
    /// Fresh state with a cumulative scale of 1.
    #[inline]
    pub const fn new(direction: Vec3, multiplier: f32) -> Self {
        Self { direction, multiplier, scale: 1.0 }
    }
}

/// Which factor the pulse switched to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PulsePhase {
    Growing,
    Shrinking,
}
