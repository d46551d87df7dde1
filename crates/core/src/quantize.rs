//! Coordinate quantization: normalized offsets to sprite grid cells.
//!
//! The pipeline per axis is lerp -> snap -> clamp -> index. The clamp after
//! snapping is mandatory: rounding at the range boundary can otherwise
//! produce a value one step outside `[p_min, p_max]` and an out-of-range
//! index.

use crate::config::GridConfig;
use crate::types::GridCell;

/// Result of quantizing one normalized offset pair.
///
/// Carries the intermediate quantized parameters alongside the cell because
/// the debug overlay displays them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized {
    /// Quantized parameter on the x axis, a multiple of `step` in range.
    pub px: f64,
    /// Quantized parameter on the y axis, a multiple of `step` in range.
    pub py: f64,
    /// Sheet cell for `(px, py)`.
    pub cell: GridCell,
}

/// Maps normalized pointer offsets onto the sprite grid.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    config: GridConfig,
}

impl Quantizer {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Map a normalized component in `[-1, 1]` to the nearest grid parameter.
    ///
    /// -1 lands exactly on `p_min`, +1 exactly on `p_max`.
    pub fn quantize_axis(&self, v: f64) -> f64 {
        let (p_min, p_max, step) = (self.config.p_min(), self.config.p_max(), self.config.step());
        let raw = p_min + ((v + 1.0) * (p_max - p_min)) / 2.0;
        let snapped = (raw / step).round() * step;
        snapped.clamp(p_min, p_max)
    }

    /// Column index for a quantized parameter: increasing value, increasing
    /// column (left to right).
    pub fn column_for(&self, value: f64) -> u32 {
        let idx = ((value - self.config.p_min()) / self.config.step()).round();
        idx.clamp(0.0, self.config.steps() as f64) as u32
    }

    /// Row index for a quantized parameter.
    ///
    /// Inverted on purpose: screen y grows downward, but the semantic "up"
    /// must select the top row of the sheet, so the maximum value maps to
    /// row 0.
    pub fn row_for(&self, value: f64) -> u32 {
        let idx = ((self.config.p_max() - value) / self.config.step()).round();
        idx.clamp(0.0, self.config.steps() as f64) as u32
    }

    /// Quantize a normalized offset pair to a sheet cell.
    ///
    /// Components are clamped to `[-1, 1]` first, so callers may pass raw
    /// offsets that exceed the container.
    pub fn resolve(&self, nx: f64, ny: f64) -> Quantized {
        let px = self.quantize_axis(nx.clamp(-1.0, 1.0));
        let py = self.quantize_axis(ny.clamp(-1.0, 1.0));
        Quantized {
            px,
            py,
            cell: GridCell::new(self.column_for(px), self.row_for(py)),
        }
    }
}
