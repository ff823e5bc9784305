//! Image strip rendering.
//!
//! Each tracked image occupies one viewport-sized page along the scroll axis.
//! The current offset selects a page-sized window over the strip; the one or
//! two pages intersecting the window are cropped to their visible cell span
//! and painted with halfblock characters (2 vertical pixels per cell).

use image::{imageops, imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use pictoscroll_core::{Fit, Orientation};

use crate::theme::ScrollerTheme;

/// One tracked image with its fitted page canvas.
///
/// The canvas is the image scaled to the page cell grid (1 cell = 1x2 px)
/// according to the active fit mode, composed onto a transparent page so
/// letterboxing is uniform. It is recomputed lazily whenever the page size or
/// the fit changes.
pub struct PageImage {
    image: DynamicImage,
    cache: Option<FittedCanvas>,
}

struct FittedCanvas {
    width: u16,
    height: u16,
    fit: Fit,
    pixels: RgbaImage,
}

impl PageImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image, cache: None }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Fitted canvas for a page of `width` x `height` cells.
    fn canvas(&mut self, width: u16, height: u16, fit: Fit) -> &RgbaImage {
        let stale = !matches!(
            &self.cache,
            Some(c) if c.width == width && c.height == height && c.fit == fit
        );
        if stale {
            self.cache = Some(FittedCanvas {
                width,
                height,
                fit,
                pixels: fit_to_canvas(&self.image, width, height, fit),
            });
        }
        &self.cache.as_ref().expect("cache populated above").pixels
    }
}

/// Scale an image onto a `width` x `height` cell page (pixel canvas of
/// `width` x `2*height`). Contain letterboxes with transparent pixels, cover
/// crops, fill stretches.
fn fit_to_canvas(img: &DynamicImage, width: u16, height: u16, fit: Fit) -> RgbaImage {
    let w = width as u32;
    let h = height as u32 * 2;
    let mut canvas = RgbaImage::new(w.max(1), h.max(1));
    if w == 0 || h == 0 {
        return canvas;
    }

    let resized = match fit {
        Fit::Contain => img.resize(w, h, FilterType::Triangle),
        Fit::Cover => img.resize_to_fill(w, h, FilterType::Triangle),
        Fit::Fill => img.resize_exact(w, h, FilterType::Triangle),
    };

    let x = w.saturating_sub(resized.width()) / 2;
    let y = h.saturating_sub(resized.height()) / 2;
    imageops::overlay(&mut canvas, &resized.to_rgba8(), x as i64, y as i64);
    canvas
}

pub struct ViewportWidget;

impl ViewportWidget {
    /// Render the visible slice of the image strip at `offset` (cells along
    /// the scroll axis).
    pub fn render(
        frame: &mut Frame,
        viewport: Rect,
        pages: &mut [PageImage],
        offset: u16,
        orientation: Orientation,
        fit: Fit,
        theme: &ScrollerTheme,
    ) {
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        frame.render_widget(Block::default().style(theme.background), viewport);

        let page = match orientation {
            Orientation::Horizontal => viewport.width,
            Orientation::Vertical => viewport.height,
        };
        if page == 0 || pages.is_empty() {
            return;
        }

        let first = (offset / page) as usize;
        let last = ((offset as u32 + page as u32 - 1) / page as u32) as usize;

        for i in first..=last.min(pages.len() - 1) {
            let rel = i as i32 * page as i32 - offset as i32;
            let skip = (-rel).max(0) as u16;
            let dest_off = rel.max(0) as u16;
            let visible = page.saturating_sub(skip + dest_off);
            if visible == 0 {
                continue;
            }

            let canvas = pages[i].canvas(viewport.width, viewport.height, fit);
            let (dest, src_x, src_y) = match orientation {
                Orientation::Horizontal => (
                    Rect::new(viewport.x + dest_off, viewport.y, visible, viewport.height),
                    skip as u32,
                    0,
                ),
                Orientation::Vertical => (
                    Rect::new(viewport.x, viewport.y + dest_off, viewport.width, visible),
                    0,
                    skip as u32 * 2,
                ),
            };
            paint_halfblocks(frame, dest, canvas, src_x, src_y, theme);
        }
    }
}

/// Paint a canvas region into `dest` using halfblock characters, one cell per
/// pixel column and pixel pair. Transparent pixels fall back to the letterbox
/// style.
fn paint_halfblocks(
    frame: &mut Frame,
    dest: Rect,
    canvas: &RgbaImage,
    src_x: u32,
    src_y: u32,
    theme: &ScrollerTheme,
) {
    for row in 0..dest.height {
        let mut spans: Vec<Span> = Vec::with_capacity(dest.width as usize);
        for col in 0..dest.width {
            let x = src_x + col as u32;
            let y = src_y + row as u32 * 2;
            let top = opaque_pixel(canvas, x, y);
            let bottom = opaque_pixel(canvas, x, y + 1);
            spans.push(halfblock_span(top, bottom, theme));
        }

        let line_area = Rect::new(dest.x, dest.y + row, dest.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
    }
}

fn opaque_pixel(canvas: &RgbaImage, x: u32, y: u32) -> Option<Rgba<u8>> {
    if x < canvas.width() && y < canvas.height() {
        let pixel = *canvas.get_pixel(x, y);
        (pixel[3] > 0).then_some(pixel)
    } else {
        None
    }
}

fn halfblock_span(top: Option<Rgba<u8>>, bottom: Option<Rgba<u8>>, theme: &ScrollerTheme) -> Span<'static> {
    match (top, bottom) {
        (Some(t), Some(b)) => Span::styled(
            "▀",
            Style::default().fg(rgb(t)).bg(rgb(b)),
        ),
        (Some(t), None) => Span::styled("▀", theme.letterbox.patch(Style::default().fg(rgb(t)))),
        (None, Some(b)) => Span::styled("▄", theme.letterbox.patch(Style::default().fg(rgb(b)))),
        (None, None) => Span::styled(" ", theme.letterbox),
    }
}

#[inline]
fn rgb(pixel: Rgba<u8>) -> Color {
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([200, 100, 50, 255])))
    }

    #[test]
    fn test_canvas_matches_page_grid() {
        let canvas = fit_to_canvas(&solid(100, 100), 10, 5, Fit::Fill);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 10);
        // Fill stretches over the whole page
        assert!(canvas.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_contain_letterboxes_wide_image() {
        // 100x10 source into a 10x20px page: resized to 10x1, centered
        let canvas = fit_to_canvas(&solid(100, 10), 10, 10, Fit::Contain);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(0, 19)[3], 0);
        assert!(canvas.pixels().any(|p| p[3] == 255));
    }

    #[test]
    fn test_cover_fills_page() {
        let canvas = fit_to_canvas(&solid(100, 10), 10, 10, Fit::Cover);
        assert!(canvas.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_cache_invalidated_by_fit_change() {
        let mut page = PageImage::new(solid(100, 10));
        let contained_corner = page.canvas(10, 10, Fit::Contain).get_pixel(0, 0)[3];
        let covered_corner = page.canvas(10, 10, Fit::Cover).get_pixel(0, 0)[3];
        assert_eq!(contained_corner, 0);
        assert_eq!(covered_corner, 255);
    }

    #[test]
    fn test_halfblock_span_states() {
        let theme = ScrollerTheme::default();
        let px = Rgba([1, 2, 3, 255]);
        assert_eq!(halfblock_span(Some(px), Some(px), &theme).content, "▀");
        assert_eq!(halfblock_span(None, Some(px), &theme).content, "▄");
        assert_eq!(halfblock_span(None, None, &theme).content, " ");
    }
}
