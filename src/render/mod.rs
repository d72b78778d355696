//! Offscreen rasterization of tile layers
//!
//! This module contains the drawing side of the generator:
//! - The offscreen buffer and its quantization pass
//! - Quarter-turn geometry and aliased primitive filling
//! - Palette handling
//! - Per-tile shape selection

/// Offscreen intensity plane and color surface
pub mod buffer;
/// Primitive shapes and rasterization
pub mod geometry;
/// Colors, palettes and quantization thresholds
pub mod palette;
/// Tile shape selection and drawing
pub mod tile;

pub use buffer::OffscreenBuffer;
pub use palette::{Color, Palette};
pub use tile::{TileShape, render_tile, select_shape};
