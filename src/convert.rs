//! Conversions between rasterizer output and the flat vertex layout consumed by
//! point rendering: `(x, y, 0.0)` triples of `f32`.

use crate::point2d::Point2D;

/// Floats per vertex in a flattened buffer
pub const VERTEX_STRIDE: usize = 3;

pub fn points_to_floats(points: &[Point2D]) -> Vec<f32> {
    let mut data = Vec::with_capacity(points.len() * VERTEX_STRIDE);
    for p in points {
        data.extend_from_slice(&[p.x, p.y, 0.0]);
    }
    data
}

/// Scale origin-centered screen coordinates into device space: `2x/width`, `2y/height`.
///
/// No translation is applied, so `data` must already be centered on the screen's middle.
/// The z component of every triple is written as `0.0`.
///
/// `data.len()` must be a multiple of [`VERTEX_STRIDE`]. Debug builds panic otherwise;
/// release builds drop the trailing partial triple.
pub fn screen_to_device(data: &[f32], width: u32, height: u32) -> Vec<f32> {
    debug_assert_eq!(data.len() % VERTEX_STRIDE, 0, "vertex buffer is not a whole number of triples");
    let (w, h) = (width as f32, height as f32);
    let mut out = Vec::with_capacity(data.len());
    for v in data.chunks_exact(VERTEX_STRIDE) {
        out.extend_from_slice(&[2.0 * v[0] / w, 2.0 * v[1] / h, 0.0]);
    }
    out
}

/// Top-left-origin window position (cursor coordinates, y down) to device space.
pub fn window_to_device(p: Point2D, width: u32, height: u32) -> Point2D {
    Point2D {
        x: 2.0 * p.x / width as f32 - 1.0,
        y: 1.0 - 2.0 * p.y / height as f32,
    }
}

/// Device-space position to a framebuffer pixel, `None` when it lands off screen.
pub fn device_to_pixel(x: f32, y: f32, width: u32, height: u32) -> Option<(u32, u32)> {
    let px = ((x + 1.0) * 0.5 * width as f32).floor();
    let py = ((1.0 - y) * 0.5 * height as f32).floor();
    if px < 0.0 || py < 0.0 || px >= width as f32 || py >= height as f32 {
        return None;
    }
    Some((px as u32, py as u32))
}

/// Byte view of a vertex buffer, ready for upload
pub fn vertex_bytes(data: &[f32]) -> &[u8] {
    bytemuck::cast_slice(data)
}
