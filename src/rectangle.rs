use crate::point2d::Point2D;

/// Integer bounding box, all bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

// helper methods
impl BoundingBox {
    /// Per-axis min/max of the three vertices, each rounded up with `ceil`.
    /// Rounding the minimum up as well drops the partial column/row at the low edge
    /// when a vertex has a fractional coordinate.
    pub fn from_triangle(p0: Point2D, p1: Point2D, p2: Point2D) -> Self {
        let min_x = p0.x.min(p1.x).min(p2.x);
        let max_x = p0.x.max(p1.x).max(p2.x);
        let min_y = p0.y.min(p1.y).min(p2.y);
        let max_y = p0.y.max(p1.y).max(p2.y);
        Self {
            min_x: min_x.ceil() as i32,
            max_x: max_x.ceil() as i32,
            min_y: min_y.ceil() as i32,
            max_y: max_y.ceil() as i32,
        }
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x as f32
            && p.x <= self.max_x as f32
            && p.y >= self.min_y as f32
            && p.y <= self.max_y as f32
    }
}
