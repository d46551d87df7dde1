//! Core widget logic - pure, deterministic, and testable
//!
//! This module contains the coordinate quantization and frame selection
//! logic. It has **zero dependencies** on rendering, event sources, or I/O,
//! making it:
//!
//! - **Deterministic**: the same normalized offset always resolves to the
//!   same sheet cell
//! - **Testable**: every law (boundary, center, idempotence) is a plain
//!   function call away
//! - **Portable**: usable from any host that can hand over pointer positions
//!
//! # Module Structure
//!
//! - [`config`]: validated, immutable grid configuration
//! - [`quantize`]: normalized offset -> quantized parameter -> grid cell
//! - [`presenter`]: change-detecting frame application over a [`FrameSurface`]
//! - [`debug`]: diagnostic readout formatting for the optional overlay
//!
//! # Example
//!
//! ```
//! use face_tracker_core::{GridConfig, Quantizer};
//!
//! let config = GridConfig::default();
//! let quantizer = Quantizer::new(config);
//!
//! // Top-right corner lands on the rightmost column, top row.
//! let q = quantizer.resolve(1.0, 1.0);
//! assert_eq!((q.cell.col, q.cell.row), (10, 0));
//! ```

pub mod config;
pub mod debug;
pub mod presenter;
pub mod quantize;

pub use face_tracker_types as types;

// Re-export commonly used types for convenience
pub use config::{GridConfig, GridConfigError};
pub use presenter::{FramePresenter, FrameSurface};
pub use quantize::{Quantized, Quantizer};
