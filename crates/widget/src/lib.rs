//! Widget module - per-instance state and bootstrap discovery.
//!
//! One [`FaceWidget`] per container element, each with its own sampler,
//! quantizer, and presenter state; instances share nothing. The host owns
//! the event loop and the surface; the widget owns everything in between:
//!
//! - [`element`]: host-agnostic description of a container (classes,
//!   key/value attributes, bounding rect)
//! - [`options`]: per-instance configuration parsed from element attributes,
//!   with silent fallback to defaults
//! - [`widget`]: the widget state machine (start, pointer/touch input,
//!   per-refresh flush)
//! - [`bootstrap`]: one-shot discovery of marked elements at startup
//!
//! # Example
//!
//! ```
//! use face_tracker_core::GridConfig;
//! use face_tracker_types::{ContainerRect, PointerSample};
//! use face_tracker_widget::{FaceWidget, WidgetOptions};
//! # use face_tracker_core::FrameSurface;
//! # use face_tracker_types::FramePosition;
//! # #[derive(Default)]
//! # struct Sink;
//! # impl FrameSurface for Sink {
//! #     fn set_sprite_image(&mut self, _: &str) {}
//! #     fn set_background_size(&mut self, _: f64) {}
//! #     fn set_background_position(&mut self, _: FramePosition) {}
//! #     fn set_debug_text(&mut self, _: &[String]) {}
//! # }
//!
//! use face_tracker_input::ManualRefresh;
//!
//! let rect = ContainerRect::new(50.0, 50.0, 100.0, 100.0);
//! let mut widget = FaceWidget::new(rect, GridConfig::default(), WidgetOptions::default());
//! let mut surface = Sink::default();
//!
//! // Start applies the sprite and a synchronous center frame.
//! widget.start(&mut surface);
//! assert_eq!(widget.last_cell().map(|c| (c.col, c.row)), Some((5, 5)));
//!
//! // Raw events coalesce; the flush applies the latest one.
//! let mut signal = ManualRefresh::new();
//! widget.pointer_moved(PointerSample::new(150.0, 50.0), &mut signal);
//! assert!(signal.take_request());
//! widget.on_frame(&mut surface);
//! assert_eq!(widget.last_cell().map(|c| (c.col, c.row)), Some((10, 0)));
//! ```

pub mod bootstrap;
pub mod element;
pub mod options;
pub mod widget;

pub use face_tracker_core as core;
pub use face_tracker_input as input;
pub use face_tracker_types as types;

pub use bootstrap::{discover, MARKER_CLASS};
pub use element::Element;
pub use options::{WidgetOptions, ATTR_BASE_PATH, ATTR_DEBUG, ATTR_SPRITE};
pub use widget::FaceWidget;
