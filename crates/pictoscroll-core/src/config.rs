use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Delay applied to the debounced navigation entry points, in milliseconds.
/// A burst of triggers inside this window collapses into the last call.
pub const DEBOUNCE_MS: u64 = 75;

/// Primary scroll axis of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(Error::Config(format!(
                "'orientation' must be 'horizontal' or 'vertical', got: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Orientation> for String {
    fn from(value: Orientation) -> Self {
        value.as_str().to_string()
    }
}

/// How an image is scaled into its page within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Fit {
    /// Aspect-preserving, fully visible, letterboxed as needed.
    Contain,
    /// Aspect-preserving, fills the page, cropped as needed.
    Cover,
    /// Stretched to the page dimensions exactly.
    Fill,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fit::Contain => "contain",
            Fit::Cover => "cover",
            Fit::Fill => "fill",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "contain" => Ok(Fit::Contain),
            "cover" => Ok(Fit::Cover),
            "fill" => Ok(Fit::Fill),
            other => Err(Error::Config(format!(
                "'fit' must be 'contain', 'cover' or 'fill', got: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Fit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Fit> for String {
    fn from(value: Fit) -> Self {
        value.as_str().to_string()
    }
}

/// Widget construction options. Every field has a default, so hosts only
/// spell out what they change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollerOptions {
    /// Scroll axis
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    /// Image scaling mode
    #[serde(default = "default_fit")]
    pub fit: Fit,
    /// Show clickable progress dots
    #[serde(default = "default_true")]
    pub progress: bool,
    /// Show clickable directional arrows
    #[serde(default = "default_true")]
    pub arrows: bool,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            fit: default_fit(),
            progress: default_true(),
            arrows: default_true(),
        }
    }
}

impl ScrollerOptions {
    /// Build options from untyped string values, validating the enumerated
    /// fields. `None` fields fall back to the defaults.
    pub fn from_raw(
        orientation: Option<&str>,
        fit: Option<&str>,
        progress: Option<bool>,
        arrows: Option<bool>,
    ) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            orientation: match orientation {
                Some(s) => s.parse()?,
                None => defaults.orientation,
            },
            fit: match fit {
                Some(s) => s.parse()?,
                None => defaults.fit,
            },
            progress: progress.unwrap_or(defaults.progress),
            arrows: arrows.unwrap_or(defaults.arrows),
        })
    }

    /// Parse options from a TOML snippet, e.g. a `[scroller]` table of a host
    /// config file.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Smooth scrolling parameters, consumed by the animator in the TUI crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Easing function
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve applied to scroll animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

fn default_orientation() -> Orientation {
    Orientation::Horizontal
}

fn default_fit() -> Fit {
    Fit::Cover
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}
