//! Frame presentation: change-detected application of the active cell.
//!
//! The presenter owns the "last applied cell" state and writes to the host
//! through the small [`FrameSurface`] trait, so hosts stay swappable and
//! tests can count writes.

use crate::config::GridConfig;
use crate::types::{FramePosition, GridCell};

/// Host-side visual element the widget draws into.
///
/// One surface per widget instance. Implementations are expected to be cheap
/// value stores; the widget guarantees at most one
/// [`set_background_position`](FrameSurface::set_background_position) call
/// per processed sample, and none when the cell is unchanged.
pub trait FrameSurface {
    /// Set the sprite sheet image path. Called once at widget start.
    fn set_sprite_image(&mut self, path: &str);

    /// Set the background size in percent (same value for both axes).
    /// Called once at widget start.
    fn set_background_size(&mut self, percent: f64);

    /// Reveal the frame at the given background offset.
    fn set_background_position(&mut self, position: FramePosition);

    /// Replace the diagnostic overlay text. Hosts without an overlay no-op.
    fn set_debug_text(&mut self, lines: &[String]);
}

/// Applies grid cells to a surface, skipping redundant writes.
#[derive(Debug, Clone)]
pub struct FramePresenter {
    steps: u32,
    last: Option<GridCell>,
}

impl FramePresenter {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            steps: config.steps(),
            last: None,
        }
    }

    /// Cell currently visible on the surface, if any frame was applied yet.
    pub fn last_cell(&self) -> Option<GridCell> {
        self.last
    }

    /// Background offset for a cell.
    pub fn position_for(&self, cell: GridCell) -> FramePosition {
        let steps = self.steps.max(1) as f64;
        FramePosition::new(
            cell.col as f64 / steps * 100.0,
            cell.row as f64 / steps * 100.0,
        )
    }

    /// Apply `cell` to the surface unless it is already visible.
    ///
    /// Returns whether a write happened.
    pub fn present(&mut self, cell: GridCell, surface: &mut dyn FrameSurface) -> bool {
        if self.last == Some(cell) {
            return false;
        }
        self.last = Some(cell);
        surface.set_background_position(self.position_for(cell));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        position_writes: u32,
        last_position: Option<FramePosition>,
    }

    impl FrameSurface for CountingSurface {
        fn set_sprite_image(&mut self, _path: &str) {}
        fn set_background_size(&mut self, _percent: f64) {}
        fn set_background_position(&mut self, position: FramePosition) {
            self.position_writes += 1;
            self.last_position = Some(position);
        }
        fn set_debug_text(&mut self, _lines: &[String]) {}
    }

    #[test]
    fn unchanged_cell_writes_nothing() {
        let mut presenter = FramePresenter::new(&GridConfig::default());
        let mut surface = CountingSurface::default();

        assert!(presenter.present(GridCell::new(5, 5), &mut surface));
        assert!(!presenter.present(GridCell::new(5, 5), &mut surface));
        assert!(!presenter.present(GridCell::new(5, 5), &mut surface));
        assert_eq!(surface.position_writes, 1);

        assert!(presenter.present(GridCell::new(5, 6), &mut surface));
        assert_eq!(surface.position_writes, 2);
    }

    #[test]
    fn position_percentages() {
        let presenter = FramePresenter::new(&GridConfig::default());
        assert_eq!(
            presenter.position_for(GridCell::new(0, 0)),
            FramePosition::new(0.0, 0.0)
        );
        assert_eq!(
            presenter.position_for(GridCell::new(10, 0)),
            FramePosition::new(100.0, 0.0)
        );
        assert_eq!(
            presenter.position_for(GridCell::new(5, 5)),
            FramePosition::new(50.0, 50.0)
        );
    }
}
