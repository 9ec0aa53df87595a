use super::vec3::{self, Vec3};

/// Axis-aligned bounding box, stored as elementwise min and max corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Degenerate box around a single point.
    #[inline]
    pub const fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Reduces `points` to their extent, seeding both corners with the first point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Bounds::point(first), Bounds::include))
    }

    /// Grows the box to cover `p`.
    #[inline]
    pub fn include(self, p: Vec3) -> Self {
        Self {
            min: vec3::min(self.min, p),
            max: vec3::max(self.max, p),
        }
    }

    /// Midpoint of the two corners.
    #[inline]
    pub fn center(self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }
}
