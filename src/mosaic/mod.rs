//! Mosaic composition and lifecycle
//!
//! This module contains:
//! - The composer drawing, quantizing and mirroring one mosaic
//! - The display layout placing both four-fold figures
//! - The session that swaps in a fresh mosaic per accepted event

/// Layered drawing, quantization and mosaic state
pub mod composer;
/// Four-fold placement and display pivots
pub mod layout;
/// Event-driven mosaic ownership
pub mod session;

pub use composer::{MosaicComposer, MosaicState};
pub use session::LogoSession;
