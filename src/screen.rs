use anyhow::{Context, Result};
use bytemuck::cast_slice_mut;
use image::RgbaImage;
use std::path::Path;

use crate::convert::{VERTEX_STRIDE, device_to_pixel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const RED: Rgba = Rgba(230, 41, 55, 255);
}

/// CPU framebuffer that device-space point clouds are plotted into before the
/// whole buffer is uploaded as a texture.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width * height) as usize;
        Self {
            width,
            height,
            rgba: vec![0; size_calc * 4],
        }
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height { return; }
        let i = ((y * self.width + x) * 4) as usize;
        self.rgba[i] = color.0;
        self.rgba[i + 1] = color.1;
        self.rgba[i + 2] = color.2;
        self.rgba[i + 3] = color.3;
    }
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height { return None }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Rgba(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]))
    }
    pub fn clear(&mut self, color: Rgba) {
        let color: u32 = u32::from_le_bytes([color.0, color.1, color.2, color.3]);
        let buf_as_u32: &mut [u32] = cast_slice_mut(&mut self.rgba);
        buf_as_u32.fill(color);
    }

    /// Plot every `(x, y, z)` triple of a device-space vertex buffer as a single pixel.
    /// Returns how many landed inside the framebuffer.
    pub fn plot_device_points(&mut self, data: &[f32], color: Rgba) -> usize {
        let mut plotted = 0;
        for v in data.chunks_exact(VERTEX_STRIDE) {
            if let Some((x, y)) = device_to_pixel(v[0], v[1], self.width, self.height) {
                self.set_pixel(x, y, color);
                plotted += 1;
            }
        }
        plotted
    }

    /// Square marker of side `size` centered on a device-space position
    pub fn plot_marker(&mut self, x: f32, y: f32, size: u32, color: Rgba) {
        let Some((cx, cy)) = device_to_pixel(x, y, self.width, self.height) else { return };
        let half = size / 2;
        for py in cy.saturating_sub(half)..=cy + half {
            for px in cx.saturating_sub(half)..=cx + half {
                self.set_pixel(px, py, color);
            }
        }
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .context("framebuffer size does not match its dimensions")?;
        img.save(path)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(())
    }
}
