//! Touch event handling.
//!
//! Multi-touch is out of scope: a touch event carries its points in order
//! and only the first one drives the widget. The list is bounded so touch
//! handling stays allocation-free.

use arrayvec::ArrayVec;

use crate::types::{PointerSample, MAX_TOUCH_POINTS};

/// Ordered touch points of one touch-move event.
pub type TouchList = ArrayVec<PointerSample, MAX_TOUCH_POINTS>;

/// First touch point, if the event carries any.
///
/// An empty list means "no sample"; callers ignore the event.
pub fn primary_touch(touches: &TouchList) -> Option<PointerSample> {
    touches.first().copied()
}
