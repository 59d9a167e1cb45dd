use std::ops::{Add, Sub, Mul};

/// A 2D point on (or near) the integer grid. Rasterizers store grid positions as `f32`
/// so their output can be uploaded as vertex data without another pass.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }

    #[inline(always)]
    pub fn swap_axes(self) -> Point2D {
        Point2D { x: self.y, y: self.x }
    }

    /// Reflect across the horizontal line `y = axis`
    #[inline(always)]
    pub fn mirror_y(self, axis: f32) -> Point2D {
        Point2D { x: self.x, y: self.y + 2.0 * (axis - self.y) }
    }

    pub fn round(self) -> Point2D {
        Point2D { x: self.x.round(), y: self.y.round() }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    fn mul(self, scalar: f32) -> Point2D {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

#[inline(always)]
pub fn dot2(a: Point2D, b: Point2D) -> f32 {
    a.x * b.x + a.y * b.y
}

#[inline(always)]
pub fn distance_squared(a: Point2D, b: Point2D) -> f32 {
    let d = a - b;
    dot2(d, d)
}
