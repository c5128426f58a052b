//! Navigation header state: scroll styling and the mobile menu overlay.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Vertical offset (px) past which the header switches to its scrolled style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Navigation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Exclusive threshold for the scrolled header style
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.scroll_threshold));
        }
        Ok(())
    }
}

/// Header state owned by the page shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl NavState {
    pub fn new(config: NavConfig) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold: config.scroll_threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the latest vertical scroll offset.
    ///
    /// Returns `true` if the scrolled flag changed. Non-finite offsets count
    /// as the top of the page.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Dismiss the overlay, e.g. after a nav link was followed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }

    /// Glyph for the mobile menu button.
    pub fn menu_glyph(&self) -> &'static str {
        if self.menu_open { "\u{2715}" } else { "\u{2630}" }
    }
}
