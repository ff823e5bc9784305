//! Mouse input handling for the scroller.
//!
//! Maps raw crossterm mouse events against the zones recorded by the last
//! draw into navigation actions. Wheel gestures are redirected into page
//! navigation: when the widget scrolls horizontally, a plain vertical wheel
//! delta is captured as cross-axis intent; when it scrolls vertically, the
//! plain wheel follows the axis and Shift signals the same redirect.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use pictoscroll_core::Orientation;

use crate::layout::Zones;

/// Navigation action resolved from a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerAction {
    /// Move one page backward
    Previous,
    /// Move one page forward
    Next,
    /// Jump to the image at this index (progress dot activation)
    GoTo(usize),
}

/// Resolve a mouse event against the drawn zones.
///
/// Returns `None` for events outside the widget or gestures the widget does
/// not capture, so the host can route them elsewhere.
pub fn resolve_mouse(
    event: &MouseEvent,
    zones: &Zones,
    orientation: Orientation,
) -> Option<ScrollerAction> {
    if zones.is_empty() {
        return None;
    }

    let pos = Position::new(event.column, event.row);
    if !zones.root.contains(pos) {
        return None;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = zones.dot_at(pos) {
                return Some(ScrollerAction::GoTo(index));
            }
            if zones.arrow_back.is_some_and(|zone| zone.contains(pos)) {
                return Some(ScrollerAction::Previous);
            }
            if zones.arrow_forward.is_some_and(|zone| zone.contains(pos)) {
                return Some(ScrollerAction::Next);
            }
            None
        }
        MouseEventKind::ScrollDown => wheel_action(event, orientation, ScrollerAction::Next),
        MouseEventKind::ScrollUp => wheel_action(event, orientation, ScrollerAction::Previous),
        MouseEventKind::ScrollRight if orientation == Orientation::Horizontal => {
            Some(ScrollerAction::Next)
        }
        MouseEventKind::ScrollLeft if orientation == Orientation::Horizontal => {
            Some(ScrollerAction::Previous)
        }
        _ => None,
    }
}

fn wheel_action(
    event: &MouseEvent,
    orientation: Orientation,
    action: ScrollerAction,
) -> Option<ScrollerAction> {
    match orientation {
        // Cross-axis redirect: plain vertical wheel drives horizontal pages.
        // A held modifier means the host keeps the gesture.
        Orientation::Horizontal => {
            if event.modifiers == KeyModifiers::NONE {
                Some(action)
            } else {
                None
            }
        }
        // Axis-aligned, or explicit redirect via Shift.
        Orientation::Vertical => {
            if event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT {
                Some(action)
            } else {
                None
            }
        }
    }
}
