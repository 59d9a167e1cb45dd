//! Midpoint (Bresenham) line rasterization.
//!
//! The integer midpoint loop only handles the first octant: increasing x and a slope
//! between 0 and 1. Any other segment is first mapped into that octant with an
//! [`OctantTransform`], rasterized there, and mapped back point by point.

use crate::point2d::Point2D;

/// Coordinate transform taking a segment into the first octant.
///
/// The axis swap is applied before the mirror, so inversion runs the other way round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OctantTransform {
    Identity,
    SwapXY,
    /// Reflect across `y = axis`
    MirrorY { axis: f32 },
    SwapXYMirrorY { axis: f32 },
}

impl OctantTransform {
    fn swaps_axes(self) -> bool {
        matches!(self, Self::SwapXY | Self::SwapXYMirrorY { .. })
    }

    fn mirror_axis(self) -> Option<f32> {
        match self {
            Self::MirrorY { axis } | Self::SwapXYMirrorY { axis } => Some(axis),
            Self::Identity | Self::SwapXY => None,
        }
    }

    fn with_mirror(self, axis: f32) -> Self {
        if self.swaps_axes() {
            Self::SwapXYMirrorY { axis }
        } else {
            Self::MirrorY { axis }
        }
    }

    pub fn apply(self, p: Point2D) -> Point2D {
        let p = if self.swaps_axes() { p.swap_axes() } else { p };
        match self.mirror_axis() {
            Some(axis) => p.mirror_y(axis),
            None => p,
        }
    }

    pub fn invert(self, p: Point2D) -> Point2D {
        let p = match self.mirror_axis() {
            Some(axis) => p.mirror_y(axis),
            None => p,
        };
        if self.swaps_axes() { p.swap_axes() } else { p }
    }
}

/// Map a segment into the first octant. Returns the canonical endpoints and the
/// transform that produced them: each returned endpoint is `transform.apply` of one
/// of the arguments, and `transform.invert` maps it back.
pub fn normalize_segment(v0: Point2D, v1: Point2D) -> (Point2D, Point2D, OctantTransform) {
    let swap = if (v0.x - v1.x).abs() < (v0.y - v1.y).abs() {
        OctantTransform::SwapXY
    } else {
        OctantTransform::Identity
    };

    // order in the swapped frame decides which endpoint starts
    let (v0, v1) = if swap.apply(v0).x > swap.apply(v1).x { (v1, v0) } else { (v0, v1) };

    let (start, end) = (swap.apply(v0), swap.apply(v1));
    // the start lies on the mirror axis, so only the end moves
    let transform = if start.y > end.y { swap.with_mirror(start.y) } else { swap };

    (transform.apply(v0), transform.apply(v1), transform)
}

/// Rasterize the segment `v0`-`v1` with the midpoint algorithm.
///
/// The result runs from whichever endpoint ends up first after octant normalization
/// (the one with smaller x, or smaller y for steep segments), so swapping the arguments
/// gives the same sequence rather than its reverse. Coincident endpoints give one point.
pub fn rasterize_line(v0: Point2D, v1: Point2D) -> Vec<Point2D> {
    let (start, end, transform) = normalize_segment(v0, v1);

    let delta_x = (end.x - start.x) as i32;
    let delta_y = (end.y - start.y) as i32;
    let mut p = 2 * delta_y - delta_x;

    let mut points = Vec::with_capacity(delta_x.max(0) as usize + 1);
    let mut last = start;
    points.push(last);
    for _ in 0..delta_x {
        if p <= 0 {
            last = Point2D { x: last.x + 1.0, y: last.y };
            p += 2 * delta_y;
        } else {
            last = Point2D { x: last.x + 1.0, y: last.y + 1.0 };
            p += 2 * delta_y - 2 * delta_x;
        }
        points.push(last);
    }

    if transform != OctantTransform::Identity {
        for point in points.iter_mut() {
            *point = transform.invert(*point);
        }
    }

    log::trace!(
        "rasterize_line: ({}, {}) -> ({}, {}) {:?}, {} points",
        v0.x, v0.y, v1.x, v1.y, transform, points.len()
    );
    points
}
