//! Value-store surface for the terminal host.
//!
//! The terminal cannot decode the sprite image, so the surface records what
//! a page host would apply as styles: sheet path, background size, current
//! background offset, and the overlay text. The view turns this into
//! display lines.

use crate::core::{FrameSurface, GridConfig};
use crate::types::{FramePosition, GridCell};

#[derive(Debug, Clone, Default)]
pub struct TermSurface {
    sprite_path: String,
    background_size_percent: f64,
    position: Option<FramePosition>,
    debug_lines: Vec<String>,
}

impl TermSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprite_path(&self) -> &str {
        &self.sprite_path
    }

    pub fn background_size_percent(&self) -> f64 {
        self.background_size_percent
    }

    pub fn position(&self) -> Option<FramePosition> {
        self.position
    }

    pub fn debug_lines(&self) -> &[String] {
        &self.debug_lines
    }

    /// Cell the current background offset reveals, if a frame was applied.
    pub fn active_cell(&self, config: &GridConfig) -> Option<GridCell> {
        let position = self.position?;
        let steps = config.steps() as f64;
        Some(GridCell::new(
            (position.col_percent / 100.0 * steps).round() as u32,
            (position.row_percent / 100.0 * steps).round() as u32,
        ))
    }
}

impl FrameSurface for TermSurface {
    fn set_sprite_image(&mut self, path: &str) {
        self.sprite_path = path.to_string();
    }

    fn set_background_size(&mut self, percent: f64) {
        self.background_size_percent = percent;
    }

    fn set_background_position(&mut self, position: FramePosition) {
        self.position = Some(position);
    }

    fn set_debug_text(&mut self, lines: &[String]) {
        self.debug_lines = lines.to_vec();
    }
}
