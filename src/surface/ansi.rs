//! ANSI terminal surface
//!
//! Draws with plain escape sequences:
//! - CSI cursor positioning
//! - 16-color SGR foreground/background (39/49 for the default sentinel)
//! - BEL for the audible alert
//!
//! Output is buffered until `flush`.

use std::io::{self, Write};

use super::Surface;
use crate::core::Color;

/// ANSI escape sequences
const CSI: &str = "\x1b[";

pub struct AnsiSurface<W: Write> {
    out: W,
    /// Fixed viewport; queried from the terminal when `None`
    size: Option<(usize, usize)>,
    /// Track current colors to minimize escape codes
    current: Option<(Option<Color>, Option<Color>)>,
    buf: String,
}

impl AnsiSurface<io::Stdout> {
    /// Surface on the process's terminal
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            size: None,
            current: None,
            buf: String::with_capacity(4096),
        }
    }

    /// Surface with a fixed viewport instead of the terminal's size
    pub fn with_size(out: W, cols: usize, rows: usize) -> Self {
        Self {
            size: Some((cols, rows)),
            ..Self::new(out)
        }
    }

    /// Hide the cursor, clear, reset attributes
    pub fn enter(&mut self) -> io::Result<()> {
        self.current = None;
        self.buf.push_str(&format!("{}?25l{}2J{}H{}0m", CSI, CSI, CSI, CSI));
        self.flush()
    }

    /// Reset attributes, show the cursor, clear, home
    pub fn leave(&mut self) -> io::Result<()> {
        self.current = None;
        self.buf.push_str(&format!("{}0m{}?25h{}2J{}H", CSI, CSI, CSI, CSI));
        self.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Generate SGR color sequence
    fn sgr(&mut self, background: Option<Color>, foreground: Option<Color>) -> String {
        let (cur_bg, cur_fg) = match self.current {
            Some((bg, fg)) => (Some(bg), Some(fg)),
            None => (None, None),
        };

        let mut codes: Vec<u8> = Vec::new();
        if cur_fg != Some(foreground) {
            codes.push(foreground.map_or(39, |c| c.fg_code()));
        }
        if cur_bg != Some(background) {
            codes.push(background.map_or(49, |c| c.bg_code()));
        }
        self.current = Some((background, foreground));

        if codes.is_empty() {
            String::new()
        } else {
            let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            format!("{}{}m", CSI, code_strs.join(";"))
        }
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.buf.push_str(&format!("{}2J{}H", CSI, CSI));
        Ok(())
    }

    fn set_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.buf.push_str(&format!("{}{};{}H", CSI, y + 1, x + 1));
        Ok(())
    }

    fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) -> io::Result<()> {
        let seq = self.sgr(background, foreground);
        self.buf.push_str(&seq);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        // Sanitize control characters to prevent terminal corruption
        self.buf.extend(
            text.chars()
                .map(|ch| if ch < ' ' || ch == '\x7f' { ' ' } else { ch }),
        );
        Ok(())
    }

    fn viewport(&self) -> (usize, usize) {
        if let Some(size) = self.size {
            return size;
        }
        crossterm::terminal::size()
            .map(|(w, h)| (w as usize, h as usize))
            .unwrap_or((80, 24))
    }

    fn beep(&mut self) -> io::Result<()> {
        self.buf.push('\x07');
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.write_all(self.buf.as_bytes())?;
        self.buf.clear();
        self.out.flush()
    }
}
