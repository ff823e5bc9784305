//! Directional arrow controls.
//!
//! One pair per orientation: previous/next glyphs for horizontal scrolling,
//! up/down for vertical. The pair is rebuilt whenever the orientation
//! changes while arrows are enabled, so the displayed controls always match
//! the scroll axis.

use ratatui::{widgets::Paragraph, Frame};

use pictoscroll_core::Orientation;

use crate::layout::Zones;
use crate::theme::ScrollerTheme;

pub struct ArrowsWidget;

impl ArrowsWidget {
    /// Glyph pair (back, forward) for an orientation.
    pub fn glyphs(orientation: Orientation) -> (&'static str, &'static str) {
        match orientation {
            Orientation::Horizontal => ("‹", "›"),
            Orientation::Vertical => ("▲", "▼"),
        }
    }

    pub fn render(frame: &mut Frame, zones: &Zones, orientation: Orientation, theme: &ScrollerTheme) {
        let (back, forward) = Self::glyphs(orientation);
        if let Some(zone) = zones.arrow_back {
            frame.render_widget(Paragraph::new(back).style(theme.arrow), zone);
        }
        if let Some(zone) = zones.arrow_forward {
            frame.render_widget(Paragraph::new(forward).style(theme.arrow), zone);
        }
    }
}
