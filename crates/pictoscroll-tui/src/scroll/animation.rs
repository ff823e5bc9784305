//! Scroll animation controller.
//!
//! Combines easing functions and timing utilities to interpolate the
//! viewport offset toward a target. This is the widget's stand-in for
//! native smooth scrolling: navigation is fire-and-forget, a new target
//! simply replaces the in-flight animation.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

/// Requested scroll behavior for a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump to the target immediately
    Auto,
    /// Animate to the target
    #[default]
    Smooth,
}

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting offset
    from: u16,
    /// Target offset
    to: u16,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Scroll animation controller over a cell-unit offset.
///
/// Call `scroll_to()` to begin a move, then `update()` each frame to get the
/// current interpolated offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current offset (always up-to-date)
    current_offset: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            animation: None,
            config: ScrollConfig::default(),
            current_offset: 0,
        }
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_offset: 0,
        }
    }

    /// Update configuration
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the target offset (final position after animation)
    pub fn target_offset(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_offset)
    }

    /// Get the current interpolated offset
    #[inline]
    pub fn current_offset(&self) -> u16 {
        self.current_offset
    }

    /// Set offset immediately (no animation)
    pub fn set_offset(&mut self, offset: u16) {
        self.animation = None;
        self.current_offset = offset;
    }

    /// Start a move to a target offset, clamped to `[0, max_offset]`.
    ///
    /// `ScrollBehavior::Auto` (or disabled smoothing) jumps immediately. A
    /// call arriving mid-animation replaces the in-flight animation, starting
    /// from the current visible offset.
    pub fn scroll_to(&mut self, target: u16, max_offset: u16, behavior: ScrollBehavior) {
        let target = target.min(max_offset);

        if behavior == ScrollBehavior::Auto || !self.config.is_smooth() {
            self.current_offset = target;
            self.animation = None;
            return;
        }

        let from = self.current_offset;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Update animation state and return the current offset.
    ///
    /// Call this every frame to advance the animation.
    pub fn update(&mut self, max_offset: u16) -> u16 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_offset = anim.to.min(max_offset);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_offset = lerp_u16(anim.from, anim.to, eased_t).min(max_offset);
            }
        } else if self.current_offset > max_offset {
            // Viewport shrank underneath us
            self.current_offset = max_offset;
        }

        self.current_offset
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Reset to initial state
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_offset = 0;
    }
}
