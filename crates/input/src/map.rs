//! Event mapping from terminal events to pointer samples.

use crate::types::PointerSample;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Map terminal mouse input to a pointer sample.
///
/// Motion is tracked anywhere on the screen, hovering or dragging alike.
/// Button and scroll events carry no new position worth a frame, so they map
/// to `None`.
pub fn pointer_sample(mouse: &MouseEvent) -> Option<PointerSample> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(PointerSample::new(mouse.column as f64, mouse.row as f64))
        }
        _ => None,
    }
}

/// Check if a key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_motion_maps_to_sample() {
        assert_eq!(
            pointer_sample(&mouse(MouseEventKind::Moved, 12, 7)),
            Some(PointerSample::new(12.0, 7.0))
        );
        assert_eq!(
            pointer_sample(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 4)),
            Some(PointerSample::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_clicks_and_scroll_are_ignored() {
        assert_eq!(
            pointer_sample(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)),
            None
        );
        assert_eq!(pointer_sample(&mouse(MouseEventKind::ScrollUp, 1, 1)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
