//! Planar coordinate type and distance helper.
//!
//! `Point` uses `f32` (single-precision) world units.  The delivery world is a
//! flat game map a few thousand units across, so single precision is exact
//! enough for every distance comparison the scheduler makes.

/// A planar world coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in world units.
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point reached by moving from `self` toward `target` by at most
    /// `step` world units.  Never overshoots: returns `target` when `step`
    /// covers the remaining distance.
    pub fn step_toward(self, target: Point, step: f32) -> Point {
        let dist = self.distance_to(target);
        if dist <= step || dist == 0.0 {
            return target;
        }
        let t = step / dist;
        Point {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
