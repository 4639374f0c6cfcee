//! Table cells and the colour palette
//!
//! Each data cell holds:
//! - A display value (split on '\n' into display lines)
//! - An optional background color
//! - An optional foreground color
//!
//! `None` for a color means "use the configured default".

use std::fmt;

use serde::Deserialize;

/// Standard ANSI 16-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,   // Gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Color {
    /// Get ANSI SGR code for foreground
    pub fn fg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 30 + v } else { 90 + (v - 8) }
    }

    /// Get ANSI SGR code for background
    pub fn bg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 40 + v } else { 100 + (v - 8) }
    }
}

/// One unit of the table: multi-line text plus optional colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    value: String,
    background: Option<Color>,
    foreground: Option<Color>,
}

impl TableCell {
    /// Create a cell with default colors
    pub fn new(value: impl fmt::Display) -> Self {
        Self {
            value: value.to_string(),
            ..Default::default()
        }
    }

    /// Create a cell with explicit colors
    pub fn with_colors(
        value: impl fmt::Display,
        background: Option<Color>,
        foreground: Option<Color>,
    ) -> Self {
        Self {
            value: value.to_string(),
            background,
            foreground,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value. Nothing is redrawn.
    pub fn set_value(&mut self, value: impl fmt::Display) {
        self.value = value.to_string();
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    pub fn set_foreground(&mut self, foreground: Option<Color>) {
        self.foreground = foreground;
    }

    /// Set both colors at once
    pub fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) {
        self.background = background;
        self.foreground = foreground;
    }

    /// Check if either color differs from the default
    pub fn has_colors(&self) -> bool {
        self.background.is_some() || self.foreground.is_some()
    }

    /// Display lines of the value
    pub fn lines(&self) -> Vec<&str> {
        self.value.split('\n').collect()
    }

    /// Reset to an empty value with default colors
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
