//! Host-facing styling for the scroller.
//!
//! The widget owns structure and behavior only; every visual attribute comes
//! from this table, one slot per element role and state. Hosts replace any
//! slot to restyle the widget without touching its logic, mirroring the
//! structure-in-widget / appearance-in-host split of the public contract.

use ratatui::style::{Color, Modifier, Style};

/// Style table for every element role of the scroller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollerTheme {
    /// Widget background (area not covered by an image)
    pub background: Style,
    /// Letterbox bars around contained images
    pub letterbox: Style,
    /// Inactive progress dot
    pub dot: Style,
    /// Progress dot of the current image
    pub dot_active: Style,
    /// Directional arrow controls
    pub arrow: Style,
}

impl Default for ScrollerTheme {
    fn default() -> Self {
        Self {
            background: Style::default(),
            letterbox: Style::default(),
            dot: Style::default().fg(Color::DarkGray),
            dot_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            arrow: Style::default().fg(Color::White),
        }
    }
}
