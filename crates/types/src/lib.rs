//! Shared types module - data structures and constants
//!
//! This module defines the fundamental types used throughout the widget.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core quantization logic, host rendering,
//! tests with hand-built fixtures).
//!
//! # Grid Parameters
//!
//! The sprite sheet is generated over a square parameter grid. The defaults
//! match the shipped sheets:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `P_MIN` | -15.0 | Minimum parameter value (left / bottom edge) |
//! | `P_MAX` | 15.0 | Maximum parameter value (right / top edge) |
//! | `STEP` | 3.0 | Quantization step between adjacent frames |
//!
//! With the defaults the grid spans 10 steps per axis, i.e. an 11 x 11 sheet
//! of frames laid out row-major with row 0 at the top.
//!
//! # Coordinate Conventions
//!
//! - Pointer samples are in host coordinates (pixels for a page, cells for a
//!   terminal), with y growing downward.
//! - Normalized offsets are in `[-1, 1]` per axis, 0 at the container center,
//!   with +1 meaning "right" on x and "up" on y. The y flip happens in
//!   [`ContainerRect::normalized_offset`] so everything downstream can treat
//!   positive y as up.
//! - Grid cells index the sheet: `col` grows left-to-right, `row` grows
//!   top-to-bottom, so the maximum parameter value on y lands on row 0.
//!
//! # Examples
//!
//! ```
//! use face_tracker_types::{ContainerRect, PointerSample, GridCell};
//!
//! let rect = ContainerRect::new(50.0, 50.0, 100.0, 100.0);
//! assert_eq!(rect.center(), PointerSample::new(100.0, 100.0));
//!
//! // Top-right corner of the container: full-right, full-up.
//! let (nx, ny) = rect.normalized_offset(PointerSample::new(150.0, 50.0));
//! assert_eq!((nx, ny), (1.0, 1.0));
//!
//! let cell = GridCell::new(10, 0);
//! assert_eq!(cell.col, 10);
//! ```

/// Minimum parameter value of the default sprite grid.
pub const P_MIN: f64 = -15.0;

/// Maximum parameter value of the default sprite grid.
pub const P_MAX: f64 = 15.0;

/// Quantization step of the default sprite grid.
///
/// `(P_MAX - P_MIN)` must stay evenly divisible by this.
pub const STEP: f64 = 3.0;

/// Refresh interval for hosts that drive frames off a fixed tick (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Default base directory for sprite sheets when no explicit path is given.
pub const DEFAULT_BASE_PATH: &str = "/faces/";

/// Fallback sprite sheet filename, joined onto the base path.
pub const SPRITE_FILENAME: &str = "sprite.webp";

/// Upper bound on touch points carried by a single touch event.
///
/// Only the first point is ever used; the rest are ignored by design.
pub const MAX_TOUCH_POINTS: usize = 5;

/// A raw pointer position in host coordinates.
///
/// This is the single-slot "latest target" value: the sampler overwrites it
/// on every raw event and the flush reads it once per refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A discrete cell on the sprite sheet.
///
/// Both indices are in `[0, steps]`. Row 0 is the top row of the sheet and
/// corresponds to the maximum parameter value on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: u32,
    pub row: u32,
}

impl GridCell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Background offset revealing one frame of the sheet, in percent per axis.
///
/// With a sheet sized to `cell_count * 100%`, offset `col / steps * 100`
/// aligns frame `col` with the container (same for rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePosition {
    pub col_percent: f64,
    pub row_percent: f64,
}

impl FramePosition {
    pub const fn new(col_percent: f64, row_percent: f64) -> Self {
        Self {
            col_percent,
            row_percent,
        }
    }
}

/// Axis-aligned bounding rectangle of a widget container, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point of the container.
    pub fn center(&self) -> PointerSample {
        PointerSample::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Map a pointer sample to a normalized offset from the container center.
    ///
    /// Each component is 0 at the center and reaches magnitude 1 at the
    /// container edge; values beyond the container exceed 1 and are clamped
    /// later by the quantizer. The y axis is flipped so that "up" is positive.
    /// A degenerate (zero-sized) container maps everything to the center.
    pub fn normalized_offset(&self, sample: PointerSample) -> (f64, f64) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        if half_w <= 0.0 || half_h <= 0.0 {
            return (0.0, 0.0);
        }
        let center = self.center();
        let nx = (sample.x - center.x) / half_w;
        let ny = (center.y - sample.y) / half_h;
        (nx, ny)
    }
}
