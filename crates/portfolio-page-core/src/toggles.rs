//! Two-state and cyclic button state.
//!
//! Labels always describe the action the *next* click performs.

use crate::config::{SectionLabels, Swatch, TextToggleConfig, ThemeLabels};

/// Theme button label for the current body state.
#[must_use]
pub fn theme_label(labels: &ThemeLabels, light_mode_active: bool) -> &str {
    if light_mode_active {
        &labels.to_dark
    } else {
        &labels.to_light
    }
}

/// Section button label for the current section state.
#[must_use]
pub fn section_label(labels: &SectionLabels, section_visible: bool) -> &str {
    if section_visible {
        &labels.hide
    } else {
        &labels.show
    }
}

/// How the text-toggle target should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPresentation<'a> {
    pub text: &'a str,
    /// `None` clears the inline `color` and `border-color`.
    pub highlight: Option<&'a str>,
    pub button_label: &'a str,
}

/// The changed/original text flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextToggle {
    toggled: bool,
}

impl TextToggle {
    #[must_use]
    pub const fn is_toggled(self) -> bool {
        self.toggled
    }

    /// Flip the flag and return the presentation for the new state.
    pub fn flip<'a>(&mut self, config: &'a TextToggleConfig) -> TextPresentation<'a> {
        self.toggled = !self.toggled;
        self.presentation(config)
    }

    #[must_use]
    pub fn presentation<'a>(&self, config: &'a TextToggleConfig) -> TextPresentation<'a> {
        if self.toggled {
            TextPresentation {
                text: &config.changed_text,
                highlight: Some(&config.highlight),
                button_label: &config.changed_label,
            }
        } else {
            TextPresentation {
                text: &config.original_text,
                highlight: None,
                button_label: &config.original_label,
            }
        }
    }
}

/// Cursor into the background palette. Always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    index: usize,
    len: usize,
}

impl ColorCycle {
    /// `len` is clamped to at least one so the modulus is defined.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: if len == 0 { 1 } else { len },
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Move to the next swatch, wrapping after the last.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Swatch under the cursor.
    #[must_use]
    pub fn current<'a>(&self, palette: &'a [Swatch]) -> Option<&'a Swatch> {
        palette.get(self.index)
    }
}
