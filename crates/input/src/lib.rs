//! Input sampling module (host-facing).
//!
//! This module is intentionally independent of the widget logic. It provides
//! the single-slot, refresh-bound sampler that coalesces raw pointer events
//! down to one processed sample per display refresh, plus mappings from
//! `crossterm` events and touch lists into [`crate::types::PointerSample`].

pub mod map;
pub mod sampler;
pub mod touch;

pub use face_tracker_types as types;

pub use map::{pointer_sample, should_quit};
pub use sampler::{FrameSampler, ManualRefresh, RefreshSignal};
pub use touch::{primary_touch, TouchList};
