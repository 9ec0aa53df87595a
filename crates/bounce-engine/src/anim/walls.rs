use crate::coords::Vec3;
use crate::geometry::Positioned;

/// Which axes were reflected this frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Reflects `direction` off the walls at `±wall`, x first, then y.
///
/// An axis flips when some point sits on or past a wall while the direction
/// still points outward through it. A set already heading back inward is left
/// alone even while some of its points remain past the wall.
pub fn reflect_direction<P: Positioned>(
    points: &[P],
    mut direction: Vec3,
    wall: f32,
) -> (Vec3, Reflection) {
    let mut reflection = Reflection::default();

    if points.iter().any(|p| hits_wall(p.position().x, direction.x, wall)) {
        direction.x = -direction.x;
        reflection.x = true;
    }

    if points.iter().any(|p| hits_wall(p.position().y, direction.y, wall)) {
        direction.y = -direction.y;
        reflection.y = true;
    }

    (direction, reflection)
}

#[inline]
fn hits_wall(coord: f32, velocity: f32, wall: f32) -> bool {
    (coord >= wall && velocity > 0.0) || (coord <= -wall && velocity < 0.0)
}
