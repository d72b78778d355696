//! Per-tile shape selection and drawing
//!
//! Each layer picks one of five shapes from its selector field:
//!
//! | selector        | shape                                         |
//! |-----------------|-----------------------------------------------|
//! | `> 0.5`         | half-disc arc or full disc (`ellipse_selector`) |
//! | `(0.3, 0.5]`    | mirrored right triangle spanning the tile     |
//! | `(0.2, 0.3]`    | half-size right triangle at the tile origin   |
//! | otherwise / NaN | edge triangle pointing at the tile centre     |
//!
//! Every comparison is a strict `>`, so ties and NaN fall to the lower branch.
//! Each shape kind rotates by its own field.

use log::trace;

use crate::render::buffer::OffscreenBuffer;
use crate::render::geometry::{Primitive, TileFrame, fill_primitive};
use crate::seed::parameters::{ParameterSet, quarter_turns};

/// Selector above which a tile draws the ellipse family
pub const ELLIPSE_THRESHOLD: f64 = 0.5;
/// Selector above which a tile draws the mirrored right triangle
pub const MIRRORED_TRIANGLE_THRESHOLD: f64 = 0.3;
/// Selector above which a tile draws the half-size right triangle
pub const RIGHT_TRIANGLE_THRESHOLD: f64 = 0.2;
/// Ellipse selector above which the arc replaces the full disc
pub const ARC_THRESHOLD: f64 = 0.5;
/// Disc diameter as a fraction of the tile size
pub const DISC_SCALE: f64 = 0.9;

/// Shape chosen for one tile, with its rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// Half disc anchored on the tile's left edge
    Arc {
        /// Clockwise quarter turns about the tile centre
        quarter_turns: u8,
    },
    /// Centred full disc, never rotated
    Disc,
    /// Right triangle with legs along two full tile edges
    MirroredTriangle {
        /// Clockwise quarter turns about the tile centre
        quarter_turns: u8,
    },
    /// Right triangle with half-size legs at the tile origin
    RightTriangle {
        /// Clockwise quarter turns about the tile centre
        quarter_turns: u8,
    },
    /// Triangle from one full edge to the tile centre
    EdgeTriangle {
        /// Clockwise quarter turns about the tile centre
        quarter_turns: u8,
    },
}

impl TileShape {
    /// Rotation applied about the tile centre
    pub const fn quarter_turns(&self) -> u8 {
        match *self {
            Self::Disc => 0,
            Self::Arc { quarter_turns }
            | Self::MirroredTriangle { quarter_turns }
            | Self::RightTriangle { quarter_turns }
            | Self::EdgeTriangle { quarter_turns } => quarter_turns,
        }
    }

    /// Unrotated primitive for a tile of the given size
    pub fn primitive(&self, size: f64) -> Primitive {
        let half = size / 2.0;
        match self {
            Self::Arc { .. } => Primitive::HalfDisc {
                center: [0.0, half],
                radius: half,
            },
            Self::Disc => Primitive::Disc {
                center: [half, half],
                radius: size * DISC_SCALE / 2.0,
            },
            Self::MirroredTriangle { .. } => {
                Primitive::Triangle([[0.0, 0.0], [0.0, size], [size, 0.0]])
            }
            Self::RightTriangle { .. } => {
                Primitive::Triangle([[0.0, 0.0], [0.0, half], [half, 0.0]])
            }
            Self::EdgeTriangle { .. } => {
                Primitive::Triangle([[0.0, 0.0], [0.0, size], [half, half]])
            }
        }
    }
}

/// Pick the shape for a selector value
pub fn select_shape(rand: f64, params: &ParameterSet) -> TileShape {
    if rand > ELLIPSE_THRESHOLD {
        if params.ellipse_selector > ARC_THRESHOLD {
            TileShape::Arc {
                quarter_turns: quarter_turns(params.arc_rotation),
            }
        } else {
            TileShape::Disc
        }
    } else if rand > MIRRORED_TRIANGLE_THRESHOLD {
        TileShape::MirroredTriangle {
            quarter_turns: quarter_turns(params.mirrored_triangle_rotation),
        }
    } else if rand > RIGHT_TRIANGLE_THRESHOLD {
        TileShape::RightTriangle {
            quarter_turns: quarter_turns(params.triangle_rotation),
        }
    } else {
        TileShape::EdgeTriangle {
            quarter_turns: quarter_turns(params.edge_triangle_rotation),
        }
    }
}

/// Draw one tile of one layer onto the buffer
///
/// The shape is filled with the flat gray `intensity` using additive blending.
/// Returns the shape that was drawn.
pub fn render_tile(
    buffer: &mut OffscreenBuffer,
    x: f64,
    y: f64,
    size: f64,
    layer_index: usize,
    intensity: u8,
    params: &ParameterSet,
) -> TileShape {
    let shape = select_shape(params.tile_selector(layer_index), params);
    let frame = TileFrame {
        x,
        y,
        size,
        quarter_turns: shape.quarter_turns(),
    };

    let covered = fill_primitive(buffer, &frame, &shape.primitive(size), intensity);
    trace!("layer {layer_index} tile at ({x}, {y}) drew {shape:?} over {covered} pixels");

    shape
}
