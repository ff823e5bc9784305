pub mod config;
pub mod error;
pub mod source;

pub use config::{EasingType, Fit, Orientation, ScrollConfig, ScrollerOptions, DEBOUNCE_MS};
pub use error::{Error, Result};
pub use source::ImageSource;
