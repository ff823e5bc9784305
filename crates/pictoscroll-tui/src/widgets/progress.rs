//! Progress dot indicators, one per tracked image.

use ratatui::{widgets::Paragraph, Frame};

use crate::layout::Zones;
use crate::theme::ScrollerTheme;

const DOT: &str = "○";
const DOT_ACTIVE: &str = "●";

pub struct ProgressWidget;

impl ProgressWidget {
    /// Render one dot per zone cell, highlighting the current image.
    pub fn render(frame: &mut Frame, zones: &Zones, cursor: usize, theme: &ScrollerTheme) {
        for (i, dot) in zones.dots.iter().enumerate() {
            let (glyph, style) = if i == cursor {
                (DOT_ACTIVE, theme.dot_active)
            } else {
                (DOT, theme.dot)
            };
            frame.render_widget(Paragraph::new(glyph).style(style), *dot);
        }
    }
}
