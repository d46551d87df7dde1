//! Face tracker (workspace facade crate).
//!
//! This package keeps a single `face_tracker::{core,input,term,types,widget}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use face_tracker_core as core;
pub use face_tracker_input as input;
pub use face_tracker_term as term;
pub use face_tracker_types as types;
pub use face_tracker_widget as widget;
