//! Zone computation for the scroller.
//!
//! Splits the host-supplied area into the image viewport, the optional
//! progress indicator cells and the optional arrow controls, and records the
//! result for mouse hit-testing. Pure geometry, no widget state.

use ratatui::layout::{Position, Rect};

use pictoscroll_core::Orientation;

/// Computed zones of one draw pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zones {
    /// Full area the widget was drawn into
    pub root: Rect,
    /// Image strip viewport (one page per image)
    pub viewport: Rect,
    /// Backward arrow control (left or up), when arrows are enabled
    pub arrow_back: Option<Rect>,
    /// Forward arrow control (right or down), when arrows are enabled
    pub arrow_forward: Option<Rect>,
    /// One cell per progress dot, in image order
    pub dots: Vec<Rect>,
}

impl Zones {
    pub fn is_empty(&self) -> bool {
        self.root.width == 0 || self.root.height == 0
    }

    /// Index of the dot containing the position, if any.
    pub fn dot_at(&self, pos: Position) -> Option<usize> {
        self.dots.iter().position(|dot| dot.contains(pos))
    }
}

/// Compute zones for an area and the current widget state.
///
/// Horizontal orientation places arrows at the left/right edge centers and a
/// dot row on the bottom line; vertical places arrows at the top/bottom
/// centers and a dot column on the right edge. Arrows and dots overlay the
/// viewport, like edge controls over a carousel.
pub fn compute(
    area: Rect,
    orientation: Orientation,
    arrows: bool,
    dot_count: usize,
) -> Zones {
    if area.width == 0 || area.height == 0 {
        return Zones::default();
    }

    let mut zones = Zones {
        root: area,
        viewport: area,
        ..Default::default()
    };

    if arrows {
        let (back, forward) = match orientation {
            Orientation::Horizontal => (
                Rect::new(area.x, area.y + area.height / 2, 1, 1),
                Rect::new(area.right().saturating_sub(1), area.y + area.height / 2, 1, 1),
            ),
            Orientation::Vertical => (
                Rect::new(area.x + area.width / 2, area.y, 1, 1),
                Rect::new(area.x + area.width / 2, area.bottom().saturating_sub(1), 1, 1),
            ),
        };
        zones.arrow_back = Some(back);
        zones.arrow_forward = Some(forward);
    }

    if dot_count > 0 {
        zones.dots = dot_cells(area, orientation, dot_count);
    }

    zones
}

/// Dot cells spaced one cell apart, centered on the trailing edge of the
/// cross axis. Dots that do not fit the area are omitted from the end.
fn dot_cells(area: Rect, orientation: Orientation, count: usize) -> Vec<Rect> {
    let span = (count as u16).saturating_mul(2).saturating_sub(1);
    match orientation {
        Orientation::Horizontal => {
            let y = area.bottom().saturating_sub(1);
            let start = area.x + area.width.saturating_sub(span) / 2;
            (0..count as u16)
                .map(|i| Rect::new(start + i * 2, y, 1, 1))
                .filter(|dot| dot.right() <= area.right())
                .collect()
        }
        Orientation::Vertical => {
            let x = area.right().saturating_sub(1);
            let start = area.y + area.height.saturating_sub(span) / 2;
            (0..count as u16)
                .map(|i| Rect::new(x, start + i * 2, 1, 1))
                .filter(|dot| dot.bottom() <= area.bottom())
                .collect()
        }
    }
}
