//! Scrolling machinery for the scroller widget.
//!
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types (re-exported from pictoscroll-core)
//! - `debounce` - Schedule-with-cancel-pending timer for navigation bursts
//! - `animation` - Animation controller combining the above
//!
//! The animator stands in for native smooth scrolling: navigation sets a
//! target page offset and the host advances the animation every tick.

pub mod animation;
pub mod config;
pub mod debounce;
pub mod easing;
pub mod timing;

pub use animation::{ScrollAnimator, ScrollBehavior};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use debounce::Debouncer;
pub use easing::{EasingType, EasingTypeExt};
