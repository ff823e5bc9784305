mod arrows;
mod progress;
mod viewport;

pub use arrows::ArrowsWidget;
pub use progress::ProgressWidget;
pub use viewport::{PageImage, ViewportWidget};
