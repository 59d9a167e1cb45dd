use crate::point2d::Point2D;

/// Radii below this produce no points
pub const MIN_RADIUS: i32 = 2;

/// Push the eight reflections of `(x, y)` around `origin`
fn plot_octants(points: &mut Vec<Point2D>, origin: Point2D, x: f32, y: f32) {
    points.extend_from_slice(&[
        Point2D { x: origin.x + x, y: origin.y + y },
        Point2D { x: origin.x + y, y: origin.y + x },
        Point2D { x: origin.x + y, y: origin.y - x },
        Point2D { x: origin.x + x, y: origin.y - y },
        Point2D { x: origin.x - x, y: origin.y - y },
        Point2D { x: origin.x - y, y: origin.y - x },
        Point2D { x: origin.x - y, y: origin.y + x },
        Point2D { x: origin.x - x, y: origin.y + y },
    ]);
}

/// Midpoint circle rasterization.
///
/// Walks the second octant from `(0, radius)` until `x >= y`, emitting all eight
/// symmetric points at every step. Points on the octant boundaries (the axes and the
/// diagonals) are emitted more than once.
pub fn rasterize_circle(origin: Point2D, radius: i32) -> Vec<Point2D> {
    if radius < MIN_RADIUS {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    plot_octants(&mut points, origin, x as f32, y as f32);
    while x < y {
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
        plot_octants(&mut points, origin, x as f32, y as f32);
    }

    log::trace!(
        "rasterize_circle: origin ({}, {}) r={} -> {} points",
        origin.x, origin.y, radius, points.len()
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_radius_is_empty() {
        assert!(rasterize_circle(Point2D::new(0.0, 0.0), 1).is_empty());
        assert!(rasterize_circle(Point2D::new(0.0, 0.0), 0).is_empty());
        assert!(rasterize_circle(Point2D::new(0.0, 0.0), -5).is_empty());
    }

    #[test]
    fn radius_two_trace() {
        // (0,2) d=-1 -> (1,2) d=5 -> (2,1) d=11, then x >= y
        let points = rasterize_circle(Point2D::new(0.0, 0.0), 2);
        assert_eq!(points.len(), 8 * 3);
        assert_eq!(points[0], Point2D::new(0.0, 2.0));
        assert_eq!(points[8], Point2D::new(1.0, 2.0));
        assert_eq!(points[16], Point2D::new(2.0, 1.0));
    }

    #[test]
    fn first_plot_hits_the_four_axis_points() {
        let origin = Point2D::new(10.0, -3.0);
        let points = rasterize_circle(origin, 5);
        let first: Vec<Point2D> = points[..8].to_vec();
        assert!(first.contains(&Point2D::new(10.0, 2.0)));
        assert!(first.contains(&Point2D::new(15.0, -3.0)));
        assert!(first.contains(&Point2D::new(10.0, -8.0)));
        assert!(first.contains(&Point2D::new(5.0, -3.0)));
    }

    #[test]
    fn output_comes_in_groups_of_eight() {
        for r in 2..40 {
            assert_eq!(rasterize_circle(Point2D::default(), r).len() % 8, 0);
        }
    }
}
