pub mod input;
pub mod layout;
pub mod scroll;
pub mod scroller;
pub mod theme;
pub mod widgets;

pub use scroll::ScrollBehavior;
pub use scroller::Scroller;
pub use theme::ScrollerTheme;

pub use pictoscroll_core::{Error, Fit, ImageSource, Orientation, Result, ScrollerOptions};
