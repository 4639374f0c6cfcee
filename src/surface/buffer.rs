//! In-memory surface
//!
//! A 2D array of styled characters standing in for a terminal. Useful for
//! tests and for headless rendering: every write lands in the buffer and
//! can be read back per character.

use std::io;

use super::Surface;
use crate::core::Color;

/// One character position on the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCell {
    pub ch: char,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            background: None,
            foreground: None,
        }
    }
}

pub struct BufferSurface {
    /// Buffer width in columns
    pub cols: usize,
    /// Buffer height in rows
    pub rows: usize,
    /// The cell buffer (row-major order)
    cells: Vec<ScreenCell>,
    cursor_x: usize,
    cursor_y: usize,
    background: Option<Color>,
    foreground: Option<Color>,
    beeps: usize,
}

impl BufferSurface {
    /// Create a blank buffer with given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![ScreenCell::default(); cols * rows],
            cursor_x: 0,
            cursor_y: 0,
            background: None,
            foreground: None,
            beeps: 0,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    /// Get the character cell at a position
    pub fn get(&self, x: usize, y: usize) -> Option<&ScreenCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// One row of text, trailing blanks kept
    pub fn line(&self, y: usize) -> String {
        (0..self.cols)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }

    /// Every row with trailing blanks trimmed
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|y| self.line(y).trim_end().to_string())
            .collect()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    /// Colors that the next write would use
    pub fn colors(&self) -> (Option<Color>, Option<Color>) {
        (self.background, self.foreground)
    }

    /// Number of beeps requested so far
    pub fn beeps(&self) -> usize {
        self.beeps
    }

    /// Resize the buffer (content is lost)
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![ScreenCell::default(); cols * rows];
        self.cursor_x = 0;
        self.cursor_y = 0;
    }
}

impl Surface for BufferSurface {
    fn clear(&mut self) -> io::Result<()> {
        let blank = ScreenCell {
            ch: ' ',
            background: self.background,
            foreground: self.foreground,
        };
        self.cells.fill(blank);
        self.cursor_x = 0;
        self.cursor_y = 0;
        Ok(())
    }

    fn set_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.cursor_x = x;
        self.cursor_y = y;
        Ok(())
    }

    fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) -> io::Result<()> {
        self.background = background;
        self.foreground = foreground;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor_x = 0;
                self.cursor_y += 1;
                continue;
            }
            // Off-screen writes are clipped but still advance the cursor
            if let Some(i) = self.index(self.cursor_x, self.cursor_y) {
                self.cells[i] = ScreenCell {
                    ch,
                    background: self.background,
                    foreground: self.foreground,
                };
            }
            self.cursor_x += 1;
        }
        Ok(())
    }

    fn viewport(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn beep(&mut self) -> io::Result<()> {
        self.beeps += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let surface = BufferSurface::new(80, 24);
        assert_eq!(surface.viewport(), (80, 24));
        assert_eq!(surface.get(79, 23).unwrap().ch, ' ');
        assert!(surface.get(80, 0).is_none());
    }

    #[test]
    fn test_buffer_write_str() {
        let mut surface = BufferSurface::new(10, 3);
        surface.set_cursor(5, 1).unwrap();
        surface.set_colors(Some(Color::Red), None).unwrap();
        surface.write_str("Hello!").unwrap();

        assert_eq!(surface.line(1), "     Hello");
        assert_eq!(surface.get(5, 1).unwrap().background, Some(Color::Red));
        assert_eq!(surface.get(4, 1).unwrap().background, None);
        assert_eq!(surface.cursor(), (11, 1));
    }

    #[test]
    fn test_buffer_newline_and_clear() {
        let mut surface = BufferSurface::new(4, 2);
        surface.write_str("ab\ncd").unwrap();
        assert_eq!(surface.lines(), vec!["ab", "cd"]);

        surface.clear().unwrap();
        assert_eq!(surface.lines(), vec!["", ""]);
        assert_eq!(surface.cursor(), (0, 0));
    }

    #[test]
    fn test_buffer_beep() {
        let mut surface = BufferSurface::new(1, 1);
        surface.beep().unwrap();
        surface.beep().unwrap();
        assert_eq!(surface.beeps(), 2);
    }
}
