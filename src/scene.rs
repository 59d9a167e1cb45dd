//! Viewer state: everything the render loop owns between frames.
//!
//! Input handlers mutate the parameters and mark the scene dirty; [`Scene::refresh`]
//! rebuilds the device-space vertex buffer only when something changed.

use rand::Rng;

use crate::bezier::{ControlPoints, GRAB_THRESHOLD, REMOVE_THRESHOLD, rasterize_curve};
use crate::circle::{MIN_RADIUS, rasterize_circle};
use crate::config::{Mode, ViewerConfig};
use crate::convert::{points_to_floats, screen_to_device, vertex_bytes, window_to_device};
use crate::geometry::triangle_points;
use crate::point2d::Point2D;
use crate::screen::{Rgba, ScreenSpace};

/// Side of the square drawn for each Bezier control point
const MARKER_SIZE: u32 = 5;

pub struct Scene {
    width: u32,
    height: u32,
    curve_samples: u32,
    mode: Mode,
    triangle: [Point2D; 3],
    filled: bool,
    radius: i32,
    control_points: ControlPoints,
    /// Control point following the cursor while the left button is held
    dragging: Option<usize>,
    warning: Option<String>,
    vertices: Vec<f32>,
    dirty: bool,
}

impl Scene {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut scene = Self {
            width: config.width,
            height: config.height,
            curve_samples: config.curve_samples,
            mode: config.mode,
            triangle: config.triangle,
            filled: config.filled,
            radius: config.radius,
            control_points: ControlPoints::new(),
            dragging: None,
            warning: None,
            vertices: Vec::new(),
            dirty: true,
        };
        if config.radius < MIN_RADIUS {
            scene.warning = Some(radius_warning());
        }
        scene
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn filled(&self) -> bool {
        self.filled
    }
    pub fn radius(&self) -> i32 {
        self.radius
    }
    pub fn triangle(&self) -> [Point2D; 3] {
        self.triangle
    }
    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
    /// Device-space `(x, y, 0)` triples from the last [`Scene::refresh`]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
    /// The vertex buffer as raw bytes, the layout a point-mode upload expects
    pub fn vertex_bytes(&self) -> &[u8] {
        vertex_bytes(&self.vertices)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::debug!("Switching mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.dragging = None;
            self.dirty = true;
        }
    }

    pub fn toggle_fill(&mut self) {
        self.filled = !self.filled;
        self.dirty |= self.mode == Mode::Triangle;
    }

    /// Change the radius by `delta`. A result below the minimum is refused and leaves
    /// the current circle on screen with a warning.
    pub fn adjust_radius(&mut self, delta: i32) {
        let requested = self.radius.saturating_add(delta);
        if requested < MIN_RADIUS {
            self.warning = Some(radius_warning());
            return;
        }
        self.warning = None;
        if requested != self.radius {
            self.radius = requested;
            self.dirty |= self.mode == Mode::Circle;
        }
    }

    pub fn set_triangle(&mut self, triangle: [Point2D; 3]) {
        self.triangle = triangle;
        self.dirty |= self.mode == Mode::Triangle;
    }

    /// New triangle with integer vertices anywhere on screen
    pub fn randomize_triangle<R: Rng>(&mut self, rng: &mut R) {
        let half_w = (self.width / 2) as i32;
        let half_h = (self.height / 2) as i32;
        let mut vertex = || {
            Point2D::new(
                rng.gen_range(-half_w..=half_w) as f32,
                rng.gen_range(-half_h..=half_h) as f32,
            )
        };
        let triangle = [vertex(), vertex(), vertex()];
        log::debug!("Random triangle {:?}", triangle);
        self.set_triangle(triangle);
    }

    /// Left button went down at `cursor` (window coordinates)
    pub fn press_primary(&mut self, cursor: Point2D) {
        if self.mode != Mode::Bezier || self.control_points.is_complete() {
            return;
        }
        if let Some(index) = self.control_points.add(cursor) {
            log::debug!("Placed control point {} at ({}, {})", index, cursor.x, cursor.y);
            self.dirty = true;
        }
    }

    /// Left button held at `cursor`. Once the curve is complete this grabs the nearest
    /// control point and keeps it attached to the cursor until release.
    pub fn hold_primary(&mut self, cursor: Point2D) {
        if self.mode != Mode::Bezier || !self.control_points.is_complete() {
            return;
        }
        let grabbed = self
            .dragging
            .or_else(|| self.control_points.nearest(cursor, GRAB_THRESHOLD));
        if let Some(index) = grabbed {
            self.dragging = Some(index);
            self.control_points.set(index, cursor);
            self.dirty = true;
        }
    }

    pub fn release_primary(&mut self) {
        self.dragging = None;
    }

    /// Right button went down at `cursor`: delete the control point under it
    pub fn press_secondary(&mut self, cursor: Point2D) {
        if self.mode != Mode::Bezier {
            return;
        }
        if let Some(index) = self.control_points.nearest(cursor, REMOVE_THRESHOLD) {
            self.control_points.remove(index);
            if self.dragging == Some(index) {
                self.dragging = None;
            }
            log::debug!("Removed control point {}", index);
            self.dirty = true;
        }
    }

    /// Rebuild the vertex buffer if any parameter changed. Returns whether it did.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.vertices = match self.mode {
            Mode::Triangle => {
                let [p0, p1, p2] = self.triangle;
                let points = triangle_points(p0, p1, p2, self.filled);
                screen_to_device(&points_to_floats(&points), self.width, self.height)
            }
            Mode::Circle => {
                let points = rasterize_circle(Point2D::default(), self.radius);
                screen_to_device(&points_to_floats(&points), self.width, self.height)
            }
            Mode::Bezier => match self.control_points.curve() {
                Some(curve) => {
                    let points: Vec<Point2D> = rasterize_curve(&curve, self.curve_samples)
                        .into_iter()
                        .map(|p| window_to_device(p, self.width, self.height))
                        .collect();
                    points_to_floats(&points)
                }
                None => Vec::new(),
            },
        };
        self.dirty = false;
        log::debug!("Regenerated {:?}: {} points", self.mode, self.vertex_count());
        true
    }

    /// Draw the current vertex buffer (and control points in Bezier mode)
    pub fn render(&self, screen: &mut ScreenSpace) {
        screen.clear(Rgba::WHITE);
        screen.plot_device_points(&self.vertices, Rgba::BLACK);
        if self.mode == Mode::Bezier {
            for p in self.control_points.iter() {
                let device = window_to_device(p, self.width, self.height);
                screen.plot_marker(device.x, device.y, MARKER_SIZE, Rgba::RED);
            }
        }
    }
}

fn radius_warning() -> String {
    format!("Circle radius must be at least {}", MIN_RADIUS)
}
