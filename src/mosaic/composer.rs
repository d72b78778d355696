//! Mosaic composition: layered tile drawing, quantization and four-fold placement

use log::debug;

use crate::io::configuration::{LAYER_COUNT, LogoConfig};
use crate::io::error::Result;
use crate::mosaic::layout::{ComposedLogo, compose_display};
use crate::render::buffer::OffscreenBuffer;
use crate::render::palette::Palette;
use crate::render::tile::{TileShape, render_tile};
use crate::seed::parameters::{ParameterSet, extract_parameters};

/// Everything produced for one seed, replaced wholesale on the next one
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicState {
    /// Seed the mosaic was generated from; `None` for the startup mosaic
    pub seed: Option<u64>,
    /// Parameters driving every tile decision
    pub params: ParameterSet,
    /// Palette used by quantization
    pub palette: Palette,
    /// Shapes drawn, layer by layer in row-major cell order
    pub shapes: Vec<TileShape>,
    /// Quantized offscreen buffer (the silhouette stays on its intensity plane)
    pub buffer: OffscreenBuffer,
    /// Figures and display canvas
    pub logo: ComposedLogo,
}

/// Builds mosaics from parameter sets using a fixed configuration
#[derive(Debug, Clone)]
pub struct MosaicComposer {
    config: LogoConfig,
}

impl MosaicComposer {
    /// Create a composer from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: LogoConfig) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// Configuration shared by every composition
    pub const fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Palette used for a parameter set
    ///
    /// The startup palette unless per-seed reshuffling is enabled.
    pub fn palette_for(&self, params: &ParameterSet) -> Palette {
        if self.config.reshuffle_per_seed {
            self.config.palette.shuffled(params.shuffle_bias)
        } else {
            self.config.palette
        }
    }

    /// Draw every layer additively onto a fresh buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn draw_layers(&self, params: &ParameterSet) -> Result<(OffscreenBuffer, Vec<TileShape>)> {
        let mut buffer = OffscreenBuffer::new(self.config.buffer_side(), self.config.background)?;
        let grid = self.config.grid_size;
        let tile_size = buffer.side() as f64 / grid as f64;
        let mut shapes = Vec::with_capacity(LAYER_COUNT * grid * grid);

        for layer_index in 0..LAYER_COUNT {
            let intensity = self
                .config
                .base_intensity
                .saturating_mul(layer_index as u8);

            for row in 0..grid {
                for col in 0..grid {
                    shapes.push(render_tile(
                        &mut buffer,
                        col as f64 * tile_size,
                        row as f64 * tile_size,
                        tile_size,
                        layer_index,
                        intensity,
                        params,
                    ));
                }
            }
        }

        Ok((buffer, shapes))
    }

    /// Draw and quantize the offscreen buffer for a parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated.
    pub fn compose_buffer(&self, params: &ParameterSet) -> Result<OffscreenBuffer> {
        let (mut buffer, _) = self.draw_layers(params)?;
        buffer.quantize(&self.palette_for(params));
        Ok(buffer)
    }

    /// Compose the full mosaic for a parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if any drawing surface cannot be allocated. No partial
    /// state is returned.
    pub fn compose(&self, params: &ParameterSet) -> Result<MosaicState> {
        if params.is_partial() {
            debug!(
                "{} parameter field(s) missing; affected decisions use their fallback shapes",
                params.missing_field_count()
            );
        }

        let palette = self.palette_for(params);
        let (mut buffer, shapes) = self.draw_layers(params)?;
        let silhouette_tile = buffer.silhouette_image();
        buffer.quantize(&palette);

        let logo = compose_display(&silhouette_tile, buffer.colored_image(), &self.config)?;

        debug!("composed mosaic with shapes {shapes:?} and palette {palette:?}");

        Ok(MosaicState {
            seed: None,
            params: *params,
            palette,
            shapes,
            buffer,
            logo,
        })
    }

    /// Compose the mosaic for a seed
    ///
    /// # Errors
    ///
    /// Returns an error if any drawing surface cannot be allocated.
    pub fn compose_seed(&self, seed: u64) -> Result<MosaicState> {
        let params = extract_parameters(seed);
        debug!("seed {seed} -> {params:?}");

        let mut state = self.compose(&params)?;
        state.seed = Some(seed);
        Ok(state)
    }
}
