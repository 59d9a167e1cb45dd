use crate::line::rasterize_line;
use crate::point2d::Point2D;
use crate::rectangle::BoundingBox;

/// Implicit line `a*x + b*y + c = 0` through two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl LineCoefficients {
    pub fn through(p0: Point2D, p1: Point2D) -> Self {
        Self {
            a: p0.y - p1.y,
            b: p1.x - p0.x,
            c: p0.x * p1.y - p1.x * p0.y,
        }
    }

    #[inline(always)]
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }
}

/// One triangle edge plus the sign its line takes on the inner side
#[derive(Debug, Clone, Copy)]
struct HalfPlane {
    line: LineCoefficients,
    sign: f32,
}

impl HalfPlane {
    fn new(p0: Point2D, p1: Point2D, opposite: Point2D) -> Self {
        let line = LineCoefficients::through(p0, p1);
        let sign = if line.eval(opposite.x, opposite.y) > 0.0 { 1.0 } else { -1.0 };
        Self { line, sign }
    }

    // Points exactly on the edge count as inside
    #[inline(always)]
    fn contains(&self, x: f32, y: f32) -> bool {
        !(self.line.eval(x, y) * self.sign < 0.0)
    }
}

/// Fill a triangle with edge equations.
///
/// Every grid point of the vertex bounding box is tested against the three half-planes;
/// the inner side of each edge is the side holding the opposite vertex, so any winding
/// works. Output is in raster order with x as the outer loop. Degenerate triangles are
/// not rejected. With collinear vertices every edge takes the `-1` sign, so the result is
/// the closed side of their shared line where it evaluates non-positive, within the box.
pub fn fill_triangle(p0: Point2D, p1: Point2D, p2: Point2D) -> Vec<Point2D> {
    let bbox = BoundingBox::from_triangle(p0, p1, p2);
    let edges = [
        HalfPlane::new(p0, p1, p2),
        HalfPlane::new(p0, p2, p1),
        HalfPlane::new(p1, p2, p0),
    ];

    let mut points = Vec::new();
    for i in bbox.min_x..=bbox.max_x {
        for j in bbox.min_y..=bbox.max_y {
            let (x, y) = (i as f32, j as f32);
            if edges.iter().all(|edge| edge.contains(x, y)) {
                points.push(Point2D { x, y });
            }
        }
    }

    log::trace!("fill_triangle: bbox {:?} -> {} points", bbox, points.len());
    points
}

/// Triangle outline as three rasterized edges, optionally followed by the filled interior.
/// Shared vertices appear once per edge that touches them.
pub fn triangle_points(p0: Point2D, p1: Point2D, p2: Point2D, filled: bool) -> Vec<Point2D> {
    let mut points = rasterize_line(p0, p1);
    points.extend(rasterize_line(p0, p2));
    points.extend(rasterize_line(p1, p2));
    if filled {
        points.extend(fill_triangle(p0, p1, p2));
    }
    points
}
