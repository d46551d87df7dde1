//! Renders surface state into display lines.
//!
//! String lines rather than a framebuffer keep the view trivially assertable
//! in tests; the renderer turns them into terminal writes.

use crate::core::GridConfig;
use crate::surface::TermSurface;

const ACTIVE_CELL: char = '@';
const IDLE_CELL: char = '.';

/// Character-grid visualization of the sprite sheet.
#[derive(Debug, Clone, Copy)]
pub struct FaceView {
    config: GridConfig,
}

impl FaceView {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Render the sheet grid with the active cell highlighted, followed by
    /// the overlay lines when present.
    pub fn render(&self, surface: &TermSurface) -> Vec<String> {
        let count = self.config.cell_count();
        let active = surface.active_cell(&self.config);

        let mut lines = Vec::with_capacity(count as usize + 4);
        lines.push(format!("face-tracker  sprite: {}", surface.sprite_path()));
        lines.push(String::new());

        for row in 0..count {
            let mut line = String::with_capacity(count as usize * 2);
            for col in 0..count {
                let is_active = active.map_or(false, |c| c.col == col && c.row == row);
                line.push(if is_active { ACTIVE_CELL } else { IDLE_CELL });
                line.push(' ');
            }
            lines.push(line.trim_end().to_string());
        }

        if !surface.debug_lines().is_empty() {
            lines.push(String::new());
            lines.extend(surface.debug_lines().iter().cloned());
        }

        lines
    }
}
