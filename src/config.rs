//! Viewer configuration from the command line.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

use crate::point2d::Point2D;

/// Largest framebuffer side accepted
pub const MAX_DIMENSION: u32 = 8192;

/// Initial triangle, in origin-centered screen coordinates
pub const DEFAULT_TRIANGLE: [Point2D; 3] = [
    Point2D::new(-150.0, -150.0),
    Point2D::new(20.0, 100.0),
    Point2D::new(200.0, -70.0),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid window size: {width}x{height} (each side must be 1-{max})", max = MAX_DIMENSION)]
    InvalidSize { width: u32, height: u32 },

    #[error("Curve sample count must be at least 1")]
    NoCurveSamples,

    #[error("Target FPS must be at least 1")]
    InvalidFps,
}

/// Which primitive the viewer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Triangle,
    Circle,
    Bezier,
}

/// Point-cloud rasterization viewer
#[derive(Parser, Debug)]
#[command(name = "pointraster")]
#[command(about = "Rasterize lines, circles, triangles and Bezier curves into points", long_about = None)]
pub struct Args {
    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Initial mode
    #[arg(short, long, value_enum, default_value_t = Mode::Triangle)]
    pub mode: Mode,

    /// Initial circle radius
    #[arg(short, long, default_value_t = 100)]
    pub radius: i32,

    /// Start with the triangle filled
    #[arg(short, long)]
    pub filled: bool,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Number of segments the Bezier curve is sampled into
    #[arg(long, default_value_t = 1000)]
    pub curve_samples: u32,

    /// Render the initial scene to this PNG and exit without opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    pub radius: i32,
    pub filled: bool,
    pub fps: u32,
    pub curve_samples: u32,
    pub triangle: [Point2D; 3],
    pub snapshot: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            mode: Mode::Triangle,
            radius: 100,
            filled: false,
            fps: 60,
            curve_samples: 1000,
            triangle: DEFAULT_TRIANGLE,
            snapshot: None,
        }
    }
}

impl Args {
    pub fn into_config(self) -> Result<ViewerConfig, ConfigError> {
        let valid_side = |side: u32| (1..=MAX_DIMENSION).contains(&side);
        if !valid_side(self.width) || !valid_side(self.height) {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        if self.curve_samples == 0 {
            return Err(ConfigError::NoCurveSamples);
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }

        Ok(ViewerConfig {
            width: self.width,
            height: self.height,
            mode: self.mode,
            radius: self.radius,
            filled: self.filled,
            fps: self.fps,
            curve_samples: self.curve_samples,
            triangle: DEFAULT_TRIANGLE,
            snapshot: self.snapshot,
        })
    }
}
