use crate::line::rasterize_line;
use crate::point2d::{Point2D, distance_squared};

/// Squared pixel distance within which a press grabs a control point
pub const GRAB_THRESHOLD: f32 = 180.0;
/// Squared pixel distance within which a right press deletes a control point
pub const REMOVE_THRESHOLD: f32 = 80.0;

/// The four control points of a cubic curve, any of which may still be unplaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints {
    slots: [Option<Point2D>; 4],
}

impl ControlPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `p` in the first empty slot. Returns `None` when the curve is already
    /// complete or `p` duplicates an existing point.
    pub fn add(&mut self, p: Point2D) -> Option<usize> {
        if self.slots.contains(&Some(p)) {
            return None;
        }
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(p);
        Some(index)
    }

    /// Index of the placed point closest to `cursor` with squared distance below
    /// `threshold`. On equal distances the later slot wins.
    pub fn nearest(&self, cursor: Point2D, threshold: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            let Some(p) = slot else { continue };
            let dist = distance_squared(*p, cursor);
            if dist >= threshold {
                continue;
            }
            match best {
                Some((_, best_dist)) if best_dist < dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    pub fn set(&mut self, index: usize, p: Point2D) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(p);
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Point2D> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// All four points, once every slot is filled
    pub fn curve(&self) -> Option<[Point2D; 4]> {
        match self.slots {
            [Some(a), Some(b), Some(c), Some(d)] => Some([a, b, c, d]),
            _ => None,
        }
    }

    /// Placed points in slot order
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Evaluate the cubic Bernstein form at `t`
pub fn cubic_bezier(points: &[Point2D; 4], t: f32) -> Point2D {
    let u = 1.0 - t;
    let [p0, p1, p2, p3] = *points;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// `samples + 1` evenly spaced points from `t = 0` to `t = 1`
pub fn sample_curve(points: &[Point2D; 4], samples: u32) -> Vec<Point2D> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| cubic_bezier(points, i as f32 / samples as f32))
        .collect()
}

/// Rasterize the curve as a chain of midpoint lines between rounded samples.
/// Consecutive samples that round to the same pixel are merged first. Each segment is
/// turned to run along the curve and the shared knot is emitted once.
pub fn rasterize_curve(points: &[Point2D; 4], samples: u32) -> Vec<Point2D> {
    let mut knots: Vec<Point2D> = sample_curve(points, samples)
        .into_iter()
        .map(Point2D::round)
        .collect();
    knots.dedup();

    let mut pixels = vec![knots[0]];
    for pair in knots.windows(2) {
        let mut segment = rasterize_line(pair[0], pair[1]);
        if segment.first() != Some(&pair[0]) {
            segment.reverse();
        }
        pixels.extend(segment.into_iter().skip(1));
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn add_fills_slots_in_order_and_rejects_duplicates() {
        let mut cp = ControlPoints::new();
        assert_eq!(cp.add(p(0.0, 0.0)), Some(0));
        assert_eq!(cp.add(p(0.0, 0.0)), None);
        assert_eq!(cp.add(p(10.0, 0.0)), Some(1));
        assert_eq!(cp.add(p(20.0, 0.0)), Some(2));
        assert!(!cp.is_complete());
        assert_eq!(cp.add(p(30.0, 0.0)), Some(3));
        assert!(cp.is_complete());
        assert_eq!(cp.add(p(40.0, 0.0)), None);
    }

    #[test]
    fn removed_slot_is_refilled_first() {
        let mut cp = ControlPoints::new();
        for x in [0.0, 10.0, 20.0, 30.0] {
            cp.add(p(x, 0.0));
        }
        assert_eq!(cp.remove(1), Some(p(10.0, 0.0)));
        assert_eq!(cp.curve(), None);
        assert_eq!(cp.add(p(15.0, 5.0)), Some(1));
        assert_eq!(cp.iter().nth(1), Some(p(15.0, 5.0)));
    }

    #[test]
    fn nearest_respects_threshold_and_prefers_closest() {
        let mut cp = ControlPoints::new();
        cp.add(p(0.0, 0.0));
        cp.add(p(10.0, 0.0));
        assert_eq!(cp.nearest(p(8.0, 0.0), GRAB_THRESHOLD), Some(1));
        assert_eq!(cp.nearest(p(2.0, 0.0), GRAB_THRESHOLD), Some(0));
        assert_eq!(cp.nearest(p(100.0, 100.0), GRAB_THRESHOLD), None);
        // 9^2 = 81 is outside the removal radius
        assert_eq!(cp.nearest(p(-9.0, 0.0), REMOVE_THRESHOLD), None);
    }

    #[test]
    fn equidistant_points_resolve_to_the_later_slot() {
        let mut cp = ControlPoints::new();
        cp.add(p(0.0, 0.0));
        cp.add(p(10.0, 0.0));
        cp.add(p(5.0, 5.0));
        assert_eq!(cp.nearest(p(5.0, 0.0), GRAB_THRESHOLD), Some(2));
        cp.remove(2);
        assert_eq!(cp.nearest(p(5.0, 0.0), GRAB_THRESHOLD), Some(1));
    }

    #[test]
    fn curve_passes_through_end_points() {
        let pts = [p(0.0, 0.0), p(0.0, 100.0), p(100.0, 100.0), p(100.0, 0.0)];
        assert_eq!(cubic_bezier(&pts, 0.0), pts[0]);
        assert_eq!(cubic_bezier(&pts, 1.0), pts[3]);
        assert_eq!(cubic_bezier(&pts, 0.5), p(50.0, 75.0));
        assert_eq!(sample_curve(&pts, 10).len(), 11);
    }

    #[test]
    fn rasterized_curve_is_connected() {
        let pts = [p(0.0, 0.0), p(0.0, 40.0), p(40.0, 40.0), p(40.0, 0.0)];
        let pixels = rasterize_curve(&pts, 16);
        assert_eq!(pixels.first(), Some(&p(0.0, 0.0)));
        for pair in pixels.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(dx <= 1.0 && dy <= 1.0, "gap between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn degenerate_curve_is_one_pixel() {
        let pts = [p(3.0, 3.0); 4];
        assert_eq!(rasterize_curve(&pts, 50), vec![p(3.0, 3.0)]);
    }
}
