//! End-to-end widget tests against a test terminal backend.

use std::time::{Duration, Instant};

use anyhow::Result;
use image::{DynamicImage, Rgba, RgbaImage};
use ratatui::{backend::TestBackend, Terminal};

use pictoscroll_core::{Fit, Orientation, ScrollConfig, ScrollerOptions};
use pictoscroll_tui::scroll::ScrollConfigExt;
use pictoscroll_tui::{ScrollBehavior, Scroller};

fn solid(r: u8, g: u8, b: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([r, g, b, 255])))
}

/// Drive `update` at the configured tick interval, the way a host event loop
/// would, until `total` has elapsed (long enough to clear the debounce
/// window).
fn run_ticks(scroller: &mut Scroller, config: &ScrollConfig, total: Duration) {
    let tick = config.animation_tick_duration();
    let deadline = Instant::now() + total;
    while Instant::now() < deadline {
        std::thread::sleep(tick);
        scroller.update();
    }
}

fn draw(terminal: &mut Terminal<TestBackend>, scroller: &mut Scroller) -> Result<()> {
    terminal.draw(|frame| scroller.draw(frame, frame.area()))?;
    Ok(())
}

fn symbol(terminal: &Terminal<TestBackend>, x: u16, y: u16) -> String {
    terminal
        .backend()
        .buffer()
        .cell((x, y))
        .map(|cell| cell.symbol().to_string())
        .unwrap_or_default()
}

#[test]
fn vertical_fill_scenario_exposes_options_and_dots() -> Result<()> {
    let options = ScrollerOptions {
        orientation: Orientation::Vertical,
        fit: Fit::Fill,
        progress: true,
        arrows: false,
    };
    let mut scroller = Scroller::new(options);
    scroller.add_images([solid(250, 0, 0), solid(0, 250, 0)])?;

    assert_eq!(scroller.orientation(), Orientation::Vertical);
    assert_eq!(scroller.fit(), Fit::Fill);
    assert!(scroller.progress_enabled());
    assert!(!scroller.arrows_enabled());

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;

    // Dot column on the right edge, centered: active dot first
    assert_eq!(symbol(&terminal, 19, 3), "●");
    assert_eq!(symbol(&terminal, 19, 5), "○");
    Ok(())
}

#[test]
fn scroll_to_last_settles_on_final_page() -> Result<()> {
    let mut scroller = Scroller::default();
    scroller.add_images([solid(250, 0, 0), solid(0, 250, 0)])?;

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;

    scroller.scroll_to_last(ScrollBehavior::Auto);
    run_ticks(&mut scroller, &ScrollConfig::default(), Duration::from_millis(90));

    // One page = viewport width (20 cells); offset settles on page 1
    assert_eq!(scroller.cursor(), 1);
    assert_eq!(scroller.offset(), 20);
    draw(&mut terminal, &mut scroller)?;

    // Dot row centered on the bottom line; the second dot is now active
    assert_eq!(symbol(&terminal, 8, 9), "○");
    assert_eq!(symbol(&terminal, 10, 9), "●");
    Ok(())
}

#[test]
fn burst_uses_last_call_behavior() -> Result<()> {
    // A long animation makes smooth vs. auto observable without timing games
    let slow = ScrollConfig {
        animation_duration_ms: 60_000,
        ..Default::default()
    };

    let mut scroller = Scroller::default().with_scroll_config(slow.clone());
    scroller.add_images([solid(1, 1, 1), solid(2, 2, 2), solid(3, 3, 3)])?;
    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;

    // Nine smooth triggers followed by one auto: exactly one navigation
    // fires and it jumps immediately.
    for _ in 0..9 {
        scroller.scroll_to_next(ScrollBehavior::Smooth);
    }
    scroller.scroll_to_next(ScrollBehavior::Auto);
    run_ticks(&mut scroller, &slow, Duration::from_millis(90));
    assert_eq!(scroller.cursor(), 1);
    assert_eq!(scroller.offset(), 20);

    // The reverse order ends smooth: the offset barely moves at first.
    let mut scroller = Scroller::default().with_scroll_config(slow.clone());
    scroller.add_images([solid(1, 1, 1), solid(2, 2, 2)])?;
    draw(&mut terminal, &mut scroller)?;

    scroller.scroll_to_next(ScrollBehavior::Auto);
    scroller.scroll_to_next(ScrollBehavior::Smooth);
    run_ticks(&mut scroller, &slow, Duration::from_millis(90));
    assert_eq!(scroller.cursor(), 1);
    assert!(scroller.offset() < 20);
    Ok(())
}

#[test]
fn arrows_render_and_disable_cleanly() -> Result<()> {
    let mut scroller = Scroller::default();
    scroller.add_images([solid(9, 9, 9), solid(8, 8, 8)])?;

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;

    assert_eq!(symbol(&terminal, 0, 5), "‹");
    assert_eq!(symbol(&terminal, 19, 5), "›");

    scroller.disable_arrows();
    draw(&mut terminal, &mut scroller)?;
    assert!(scroller.zones().arrow_back.is_none());
    assert!(scroller.zones().arrow_forward.is_none());
    assert_ne!(symbol(&terminal, 0, 5), "‹");
    Ok(())
}

#[test]
fn orientation_change_swaps_arrow_pair() -> Result<()> {
    let mut scroller = Scroller::default();
    scroller.add_images([solid(9, 9, 9), solid(8, 8, 8)])?;

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;
    assert_eq!(symbol(&terminal, 0, 5), "‹");

    scroller.set_orientation(Orientation::Vertical);
    draw(&mut terminal, &mut scroller)?;
    assert_eq!(symbol(&terminal, 10, 0), "▲");
    assert_eq!(symbol(&terminal, 10, 9), "▼");
    Ok(())
}

#[test]
fn wheel_and_dot_clicks_navigate() -> Result<()> {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    // Smoothing off so every committed navigation lands instantly
    let instant = ScrollConfig {
        smooth_enabled: false,
        ..Default::default()
    };
    let mut scroller = Scroller::default().with_scroll_config(instant);
    scroller.add_images([solid(1, 1, 1), solid(2, 2, 2), solid(3, 3, 3)])?;

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    draw(&mut terminal, &mut scroller)?;

    // Wheel over the viewport: cross-axis redirect into a debounced step
    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 5,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    assert!(scroller.handle_mouse(&wheel));
    run_ticks(&mut scroller, &ScrollConfig::default(), Duration::from_millis(90));
    assert_eq!(scroller.cursor(), 1);
    assert_eq!(scroller.offset(), 20);

    // Dot activation jumps straight to its index
    let dot = scroller.zones().dots[2];
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: dot.x,
        row: dot.y,
        modifiers: KeyModifiers::NONE,
    };
    assert!(scroller.handle_mouse(&click));
    assert_eq!(scroller.cursor(), 2);
    assert_eq!(scroller.offset(), 40);

    // Events outside the widget are not consumed
    let outside = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 50,
        row: 50,
        modifiers: KeyModifiers::NONE,
    };
    assert!(!scroller.handle_mouse(&outside));
    Ok(())
}

#[test]
fn degenerate_area_renders_nothing() -> Result<()> {
    let mut scroller = Scroller::default();
    scroller.add_images([solid(9, 9, 9)])?;

    let mut terminal = Terminal::new(TestBackend::new(20, 10))?;
    terminal.draw(|frame| scroller.draw(frame, ratatui::layout::Rect::new(0, 0, 0, 0)))?;
    assert!(scroller.zones().is_empty());
    Ok(())
}
