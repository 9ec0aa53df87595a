use crate::coords::{Bounds, Vec3};

/// Anything with a position the animator can move.
pub trait Positioned {
    fn position(&self) -> Vec3;
    fn position_mut(&mut self) -> &mut Vec3;
}

impl Positioned for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }

    #[inline]
    fn position_mut(&mut self) -> &mut Vec3 {
        self
    }
}

/// Moves every point by `offset`.
pub fn translate<P: Positioned>(points: &mut [P], offset: Vec3) {
    for p in points.iter_mut() {
        *p.position_mut() += offset;
    }
}

/// Axis-aligned extent of the set. `None` when the set is empty.
pub fn bounding_box<P: Positioned>(points: &[P]) -> Option<Bounds> {
    Bounds::from_points(points.iter().map(Positioned::position))
}

/// Scales every point by `factor` relative to `center`.
pub fn scale_about<P: Positioned>(points: &mut [P], center: Vec3, factor: f32) {
    for p in points.iter_mut() {
        let pos = p.position_mut();
        *pos = (*pos - center) * factor + center;
    }
}
