//! Terminal host module.
//!
//! A small rendering layer that lets the widget run inside a terminal:
//! the terminal mouse plays the role of the page pointer and the sprite
//! sheet is visualized as a character grid with the active frame
//! highlighted.
//!
//! Goals:
//! - Keep the widget logic host-free and testable
//! - Provide a surface implementation that just stores values
//! - Keep terminal I/O behind enter/exit with guaranteed restoration
//!
//! - [`surface`]: [`TermSurface`], a value-store [`FrameSurface`] impl
//! - [`view`]: renders surface state into display lines
//! - [`renderer`]: raw-mode crossterm renderer with mouse capture

pub mod renderer;
pub mod surface;
pub mod view;

pub use face_tracker_core as core;
pub use face_tracker_types as types;

pub use face_tracker_core::FrameSurface;
pub use renderer::TermRenderer;
pub use surface::TermSurface;
pub use view::FaceView;
