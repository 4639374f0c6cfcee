//! Display surfaces
//!
//! A surface is anything the table display can draw onto: a character
//! addressable screen with a cursor, a current color pair, and a size.

pub mod ansi;
pub mod buffer;

pub use ansi::AnsiSurface;
pub use buffer::BufferSurface;

use std::io;

use crate::core::Color;

/// Character-addressable drawing target
///
/// Colors are `Option<Color>`; `None` selects the terminal's own default.
pub trait Surface {
    /// Clear the whole screen and home the cursor
    fn clear(&mut self) -> io::Result<()>;

    /// Move the write cursor (0-based)
    fn set_cursor(&mut self, x: usize, y: usize) -> io::Result<()>;

    /// Set the colors used by subsequent writes
    fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) -> io::Result<()>;

    /// Write text at the cursor, advancing it
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Visible (width, height) in characters
    fn viewport(&self) -> (usize, usize);

    /// Audible alert
    fn beep(&mut self) -> io::Result<()>;

    /// Push buffered output to the device
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
