//! Deterministic generative logos seeded by captured photos
//!
//! A capture payload is hashed into a 53-bit seed whose decimal digits drive
//! every decision: which shape each of three gray layers draws, how it is
//! rotated, and how the additive overlap is quantized into a flat
//! three-color palette. The buffer is then mirrored four-fold into a
//! rotationally symmetric figure.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Mosaic composition, display layout and event-driven sessions
pub mod mosaic;
/// Offscreen buffer, palette and tile rasterization
pub mod render;
/// Seed derivation and parameter extraction
pub mod seed;

pub use io::error::{LogoError, Result};
