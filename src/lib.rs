//! CPU point rasterization: midpoint lines and circles, edge-equation triangle fill and
//! cubic Bezier curves, producing flat `(x, y, 0)` vertex buffers for point rendering.

pub mod point2d;
pub mod rectangle;
pub mod geometry;
pub mod line;
pub mod circle;
pub mod bezier;
pub mod convert;
pub mod screen;
pub mod config;
pub mod scene;

pub use circle::rasterize_circle;
pub use convert::{points_to_floats, screen_to_device};
pub use geometry::{fill_triangle, triangle_points};
pub use line::rasterize_line;
pub use point2d::Point2D;
pub use rectangle::BoundingBox;
