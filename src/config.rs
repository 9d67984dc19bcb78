//! Behavior configuration.
//!
//! Every timing and breakpoint the interaction layer uses lives here, with
//! defaults matching the stock gallery theme. Sites that want a slower
//! autoplay or a different mobile breakpoint override just those values in
//! a `behaviors.toml`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [nav]
//! breakpoint = 900            # Viewport width above which the panel force-closes
//!
//! [gallery]
//! autoplay_ms = 3000          # Autoplay advance interval
//! manual_pause_factor = 1.2   # Resume delay after prev/next, × autoplay_ms
//! slide_click_pause_ms = 3500 # Resume delay after a slide click
//! narrow_breakpoint = 600     # >= this width shows 2 slides
//! wide_breakpoint = 900       # >= this width shows 3 slides
//!
//! [lightbox]
//! clear_delay_ms = 200        # Post-close delay before the image src is blanked
//!
//! [contact]
//! send_delay_ms = 900         # Simulated send duration
//! invalid_hide_ms = 2400      # Validation message visibility
//! sent_hide_ms = 2600         # Success message visibility
//! warn_color = "#f8b4a6"
//! ok_color = "#cfe9d3"
//! ```
//!
//! Config files are sparse — override only what you want. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Interaction-layer configuration, loaded from `behaviors.toml`.
///
/// All fields have defaults matching the stock theme; user files need only
/// specify overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Mobile navigation panel settings.
    pub nav: NavConfig,
    /// Gallery carousel autoplay and responsiveness settings.
    pub gallery: GalleryConfig,
    /// Lightbox modal settings.
    pub lightbox: LightboxConfig,
    /// Contact form simulation timings and message colors.
    pub contact: ContactConfig,
}

impl BehaviorConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.autoplay_ms == 0 {
            return Err(ConfigError::Validation(
                "gallery.autoplay_ms must be non-zero".into(),
            ));
        }
        if self.gallery.manual_pause_factor <= 0.0 {
            return Err(ConfigError::Validation(
                "gallery.manual_pause_factor must be positive".into(),
            ));
        }
        if self.gallery.narrow_breakpoint >= self.gallery.wide_breakpoint {
            return Err(ConfigError::Validation(
                "gallery.narrow_breakpoint must be below gallery.wide_breakpoint".into(),
            ));
        }
        Ok(())
    }
}

/// Mobile navigation panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Viewport width in logical pixels above which an open panel
    /// force-closes (the desktop layout has no panel to toggle).
    pub breakpoint: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { breakpoint: 900 }
    }
}

/// Gallery carousel autoplay and responsiveness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Autoplay advance interval in milliseconds.
    pub autoplay_ms: u64,
    /// Resume delay after a manual prev/next, as a multiple of
    /// `autoplay_ms`.
    pub manual_pause_factor: f64,
    /// Fixed resume delay after a slide click.
    pub slide_click_pause_ms: u64,
    /// Viewport width at or above which two slides are visible.
    pub narrow_breakpoint: u32,
    /// Viewport width at or above which three slides are visible.
    pub wide_breakpoint: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: 3000,
            manual_pause_factor: 1.2,
            slide_click_pause_ms: 3500,
            narrow_breakpoint: 600,
            wide_breakpoint: 900,
        }
    }
}

impl GalleryConfig {
    /// Resume delay after a manual prev/next, in milliseconds.
    pub fn manual_pause_ms(&self) -> u64 {
        (self.autoplay_ms as f64 * self.manual_pause_factor).round() as u64
    }

    /// How many slides are simultaneously visible at `width`.
    pub fn visible_count(&self, width: u32) -> usize {
        if width >= self.wide_breakpoint {
            3
        } else if width >= self.narrow_breakpoint {
            2
        } else {
            1
        }
    }
}

/// Lightbox modal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    /// Delay after close before the displayed image source is blanked.
    /// Must outlast the theme's closing transition so the image doesn't
    /// vanish mid-fade.
    pub clear_delay_ms: u64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self { clear_delay_ms: 200 }
    }
}

/// Contact form simulation timings and message colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Simulated send duration before the success message appears.
    pub send_delay_ms: u64,
    /// How long the validation warning stays visible.
    pub invalid_hide_ms: u64,
    /// How long the success message stays visible.
    pub sent_hide_ms: u64,
    /// Text color for the validation warning.
    pub warn_color: String,
    /// Text color for the sending/sent messages.
    pub ok_color: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 900,
            invalid_hide_ms: 2400,
            sent_hide_ms: 2600,
            warn_color: "#f8b4a6".to_string(),
            ok_color: "#cfe9d3".to_string(),
        }
    }
}
