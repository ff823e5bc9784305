//! The image scroller widget.
//!
//! A `Scroller` lays its images out as viewport-sized pages along one axis
//! and moves between them with animated or immediate scrolling. The host
//! owns the area: it passes a `Rect` to `draw` every frame, advances timers
//! with `update` on its tick, and forwards mouse events to `handle_mouse`.
//!
//! Navigation is a cursor over the page sequence. The relative moves
//! (first/last/previous/next) are debounced so a wheel burst collapses into
//! one step; `scroll_to_index` is the canonical primitive and fires
//! immediately. Out-of-range indices clamp, an empty sequence ignores
//! navigation. Previous/next derive the current page from the actual
//! viewport offset, so user-visible position wins over a stale cursor; the
//! cursor is re-settled from the offset whenever the animation comes to rest.

use std::time::{Duration, Instant};

use crossterm::event::MouseEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, trace};

use pictoscroll_core::{
    source, Fit, ImageSource, Orientation, Result, ScrollConfig, ScrollerOptions, DEBOUNCE_MS,
};

use crate::input::{self, ScrollerAction};
use crate::layout::{self, Zones};
use crate::scroll::{Debouncer, ScrollAnimator, ScrollBehavior};
use crate::theme::ScrollerTheme;
use crate::widgets::{ArrowsWidget, PageImage, ProgressWidget, ViewportWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavKind {
    First,
    Last,
    Previous,
    Next,
}

/// One debounced navigation trigger. The last request scheduled inside the
/// window wins, including its behavior argument.
#[derive(Debug, Clone, Copy)]
struct NavRequest {
    kind: NavKind,
    behavior: ScrollBehavior,
}

pub struct Scroller {
    options: ScrollerOptions,
    theme: ScrollerTheme,
    pages: Vec<PageImage>,
    /// Current page index; re-derived from the offset on every settle
    cursor: usize,
    animator: ScrollAnimator,
    debouncer: Debouncer<NavRequest>,
    /// Orientation the arrow pair was built for; `None` while disabled
    arrow_axis: Option<Orientation>,
    /// Zones of the last draw, used for mouse hit-testing
    zones: Zones,
    /// Page size in cells along the scroll axis, from the last draw
    page_extent: u16,
}

impl Scroller {
    pub fn new(options: ScrollerOptions) -> Self {
        let arrow_axis = options.arrows.then_some(options.orientation);
        Self {
            options,
            theme: ScrollerTheme::default(),
            pages: Vec::new(),
            cursor: 0,
            animator: ScrollAnimator::default(),
            debouncer: Debouncer::new(Duration::from_millis(DEBOUNCE_MS)),
            arrow_axis,
            zones: Zones::default(),
            page_extent: 0,
        }
    }

    pub fn with_theme(mut self, theme: ScrollerTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        self.animator.set_config(config);
        self
    }

    // --- image management ---

    /// Append images to the sequence, in order.
    ///
    /// Decoding is all-or-nothing: if any source fails, the call returns the
    /// error and the tracked sequence is untouched.
    pub fn add_images<I, S>(&mut self, sources: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<ImageSource>,
    {
        let loaded = source::load_all(sources.into_iter().map(Into::into))?;
        let added = loaded.len();
        self.pages.extend(loaded.into_iter().map(PageImage::new));
        debug!(added, total = self.pages.len(), "images added");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    // --- configuration ---

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    /// Change the scroll axis. Keeps the cursor; rebuilds the arrow pair for
    /// the new axis when arrows are enabled. Idempotent for the current value.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        self.options.orientation = orientation;
        if self.arrow_axis.is_some() {
            self.arrow_axis = Some(orientation);
        }
        // The offset axis changed meaning: stop any motion and re-anchor on
        // the cursor page at the next draw.
        self.animator.cancel();
        self.page_extent = 0;
        debug!(%orientation, "orientation changed");
    }

    pub fn fit(&self) -> Fit {
        self.options.fit
    }

    /// Change the image scaling mode. Fitted page canvases are recomputed
    /// lazily on the next draw. Idempotent for the current value.
    pub fn set_fit(&mut self, fit: Fit) {
        self.options.fit = fit;
    }

    pub fn progress_enabled(&self) -> bool {
        self.options.progress
    }

    pub fn set_progress(&mut self, enabled: bool) {
        self.options.progress = enabled;
        if !enabled {
            self.zones.dots.clear();
        }
    }

    pub fn arrows_enabled(&self) -> bool {
        self.arrow_axis.is_some()
    }

    /// Orientation the current arrow pair was built for, if enabled.
    pub fn arrow_orientation(&self) -> Option<Orientation> {
        self.arrow_axis
    }

    /// Build the arrow pair for the current orientation. Safe to call while
    /// already enabled: the pair is rebuilt, never duplicated.
    pub fn enable_arrows(&mut self) {
        self.options.arrows = true;
        self.arrow_axis = Some(self.options.orientation);
    }

    /// Remove the arrow pair and clear its hit zones.
    pub fn disable_arrows(&mut self) {
        self.options.arrows = false;
        self.arrow_axis = None;
        self.zones.arrow_back = None;
        self.zones.arrow_forward = None;
    }

    pub fn theme(&self) -> &ScrollerTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ScrollerTheme) {
        self.theme = theme;
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    // --- navigation ---

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current offset in cells along the scroll axis.
    pub fn offset(&self) -> u16 {
        self.animator.current_offset()
    }

    /// Scroll so the image at `index` is in view. The canonical primitive:
    /// fires immediately, clamps out-of-range indices and ignores the call
    /// on an empty sequence.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        if self.pages.is_empty() {
            trace!("navigation ignored: no images");
            return;
        }
        let index = index.min(self.pages.len() - 1);
        self.commit(index, behavior);
    }

    pub fn scroll_to_first(&mut self, behavior: ScrollBehavior) {
        self.debouncer.schedule(NavRequest {
            kind: NavKind::First,
            behavior,
        });
    }

    /// Debounced like the other relative/edge moves — unlike
    /// `scroll_to_index`, which fires immediately.
    pub fn scroll_to_last(&mut self, behavior: ScrollBehavior) {
        self.debouncer.schedule(NavRequest {
            kind: NavKind::Last,
            behavior,
        });
    }

    pub fn scroll_to_previous(&mut self, behavior: ScrollBehavior) {
        self.debouncer.schedule(NavRequest {
            kind: NavKind::Previous,
            behavior,
        });
    }

    pub fn scroll_to_next(&mut self, behavior: ScrollBehavior) {
        self.debouncer.schedule(NavRequest {
            kind: NavKind::Next,
            behavior,
        });
    }

    /// Advance timers: fire an elapsed debounced navigation, step the scroll
    /// animation and settle the cursor. Call once per host tick.
    pub fn update(&mut self) {
        if let Some(request) = self.debouncer.poll(Instant::now()) {
            self.apply(request);
        }
        let max = self.max_offset();
        self.animator.update(max);
        if !self.animator.is_animating() {
            self.cursor = self.current_index();
        }
    }

    fn apply(&mut self, request: NavRequest) {
        if self.pages.is_empty() {
            trace!("navigation ignored: no images");
            return;
        }
        let last = self.pages.len() - 1;
        let index = match request.kind {
            NavKind::First => 0,
            NavKind::Last => last,
            // Relative moves start from the visible position, not the
            // stored cursor: user scrolling may have moved the viewport.
            NavKind::Previous => self.current_index().saturating_sub(1),
            NavKind::Next => (self.current_index() + 1).min(last),
        };
        self.commit(index, request.behavior);
    }

    fn commit(&mut self, index: usize, behavior: ScrollBehavior) {
        let max = self.max_offset();
        let target = (index as u32 * self.page_extent as u32).min(max as u32) as u16;
        self.animator.scroll_to(target, max, behavior);
        self.cursor = index;
        debug!(index, ?behavior, "scroll committed");
    }

    fn max_offset(&self) -> u16 {
        let pages = self.pages.len().saturating_sub(1) as u32;
        (pages * self.page_extent as u32).min(u16::MAX as u32) as u16
    }

    /// Page index nearest the current offset.
    fn current_index(&self) -> usize {
        if self.pages.is_empty() {
            return 0;
        }
        let last = self.pages.len() - 1;
        if self.page_extent == 0 {
            return self.cursor.min(last);
        }
        let page = self.page_extent as u32;
        let offset = self.animator.current_offset() as u32;
        (((offset + page / 2) / page) as usize).min(last)
    }

    // --- input ---

    /// Route a mouse event through the zones of the last draw. Returns
    /// whether the event was consumed.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        let Some(action) = input::resolve_mouse(event, &self.zones, self.options.orientation)
        else {
            return false;
        };
        trace!(?action, "mouse input");
        match action {
            ScrollerAction::GoTo(index) => self.scroll_to_index(index, ScrollBehavior::Smooth),
            ScrollerAction::Previous => self.scroll_to_previous(ScrollBehavior::Smooth),
            ScrollerAction::Next => self.scroll_to_next(ScrollBehavior::Smooth),
        }
        true
    }

    // --- rendering ---

    /// Render into `area` and record hit zones. A degenerate area renders
    /// nothing.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let dot_count = if self.options.progress {
            self.pages.len()
        } else {
            0
        };
        let zones = layout::compute(
            area,
            self.options.orientation,
            self.arrow_axis.is_some(),
            dot_count,
        );
        if zones.is_empty() {
            self.zones = zones;
            return;
        }

        let page = match self.options.orientation {
            Orientation::Horizontal => zones.viewport.width,
            Orientation::Vertical => zones.viewport.height,
        };
        if page != self.page_extent {
            // Layout changed underneath us: re-anchor on the cursor page.
            self.page_extent = page;
            let max = self.max_offset();
            let target = (self.cursor as u32 * page as u32).min(max as u32) as u16;
            self.animator.set_offset(target);
        }

        ViewportWidget::render(
            frame,
            zones.viewport,
            &mut self.pages,
            self.animator.current_offset(),
            self.options.orientation,
            self.options.fit,
            &self.theme,
        );
        if !zones.dots.is_empty() {
            ProgressWidget::render(frame, &zones, self.current_index(), &self.theme);
        }
        if let Some(axis) = self.arrow_axis {
            ArrowsWidget::render(frame, &zones, axis, &self.theme);
        }

        self.zones = zones;
    }

    /// Zones recorded by the last draw.
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// Release everything the widget holds: images, caches, hit zones,
    /// pending navigation and any running animation. The widget returns to
    /// its freshly constructed state.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.cursor = 0;
        self.animator.reset();
        self.debouncer.cancel();
        self.zones = Zones::default();
        self.page_extent = 0;
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(ScrollerOptions::default())
    }
}
