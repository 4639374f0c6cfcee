//! Table display engine
//!
//! Owns a table and a surface. `layout_and_compose` measures the table,
//! builds the framed text and paints it; after that, single cells are
//! repainted in place from the cached layout without recomposing.
//!
//! # Example
//!
//! ```
//! use boxgrid::{BufferSurface, Color, RenderConfig, Table, TableDisplay};
//!
//! let table = Table::from_rows(["X", "Y"], [["1", "1"], ["1", "1"]]).unwrap();
//! let mut display =
//!     TableDisplay::new(table, RenderConfig::default(), BufferSurface::new(20, 10)).unwrap();
//! display.layout_and_compose().unwrap();
//! display.edit_cell_and_color(1, 1, "2", Some(Color::Red), None).unwrap();
//! assert_eq!(display.surface().lines()[3], "│1│2│");
//! ```

use std::fmt;

use log::{debug, trace, warn};

use crate::config::RenderConfig;
use crate::core::text::max_line_width;
use crate::core::{pad_center, pad_vertical_center, BorderStyle, Color, Layout, Table};
use crate::error::{TableError, TableResult};
use crate::surface::Surface;

pub struct TableDisplay<S: Surface> {
    table: Table,
    config: RenderConfig,
    surface: S,
    /// Layout of the last successful compose
    layout: Option<Layout>,
    /// Frame text of the last successful compose, one entry per screen row
    frame: Option<Vec<String>>,
}

impl<S: Surface> TableDisplay<S> {
    pub fn new(table: Table, config: RenderConfig, surface: S) -> TableResult<Self> {
        if config.even_row_heights && table.rows() == 0 {
            return Err(TableError::EmptyAxis { axis: "rows" });
        }
        Ok(Self {
            table,
            config,
            surface,
            layout: None,
            frame: None,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Cached layout, if the table has been composed
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Cached frame lines, if the table has been composed
    pub fn frame(&self) -> Option<&[String]> {
        self.frame.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn cached_layout(&self) -> TableResult<&Layout> {
        self.layout.as_ref().ok_or(TableError::NotComposed)
    }

    /// Measure the table, compose the frame and paint it.
    ///
    /// Nothing is cached when the viewport is too small; the caller may
    /// retry once the terminal has been enlarged.
    pub fn layout_and_compose(&mut self) -> TableResult<()> {
        let layout = Layout::compute(&self.table, &self.config)?;
        let frame = compose(&self.table, &layout, &self.config.border)?;

        let (required_width, required_height) = layout.required_size();
        let (width, height) = self.surface.viewport();
        if width < required_width || height < required_height {
            warn!(
                "Viewport {}x{} too small for table ({}x{})",
                width, height, required_width, required_height
            );
            self.surface.beep()?;
            self.surface.flush()?;
            return Err(TableError::ViewportTooSmall {
                required_width,
                required_height,
                width,
                height,
            });
        }

        debug!(
            "Composed {}x{} table: widths {:?}, heights {:?}",
            required_width,
            required_height,
            layout.column_widths(),
            layout.row_heights()
        );

        self.layout = Some(layout);
        self.frame = Some(frame);
        self.paint_frame()
    }

    /// Repaint the cached frame, composing first if there is none.
    ///
    /// The frame is repainted as it was composed; cell edits made since
    /// then are replayed with `refresh_all`.
    pub fn redraw(&mut self) -> TableResult<()> {
        if self.frame.is_none() {
            return self.layout_and_compose();
        }
        self.paint_frame()
    }

    fn paint_frame(&mut self) -> TableResult<()> {
        let frame = self.frame.as_ref().ok_or(TableError::NotComposed)?;

        self.surface
            .set_colors(self.config.default_background, self.config.default_foreground)?;
        self.surface.clear()?;
        for (y, line) in frame.iter().enumerate() {
            self.surface.set_cursor(0, y)?;
            self.surface.write_str(line)?;
        }
        self.surface.set_cursor(0, 0)?;
        self.surface.flush()?;
        Ok(())
    }

    /// Cursor anchor of a cell, header row included
    ///
    /// See [`Layout::cell_screen_position`] for the exact accumulation.
    pub fn cell_screen_position(&self, col: usize, row: usize) -> TableResult<(usize, usize)> {
        self.table.check_bounds(col, row)?;
        self.cached_layout()?.cell_screen_position(col, row)
    }

    /// First character of a cell's content area, header row included
    pub fn cell_origin(&self, col: usize, row: usize) -> TableResult<(usize, usize)> {
        self.table.check_bounds(col, row)?;
        self.cached_layout()?.cell_origin(col, row)
    }

    /// Fail if `value` would not fit the cached slot for a cell
    fn check_fits(&self, col: usize, row: usize, value: &str) -> TableResult<()> {
        let Some(layout) = &self.layout else {
            return Ok(());
        };
        let lines: Vec<&str> = value.split('\n').collect();
        let width = max_line_width(&lines);
        let height = layout.row_height(row);
        let column_width = layout.column_width(col);
        if lines.len() > height || width > column_width {
            return Err(TableError::StaleLayout {
                col,
                row,
                lines: lines.len(),
                width,
                height,
                column_width,
            });
        }
        Ok(())
    }

    /// Repaint one data cell from the cached layout
    pub fn refresh_cell(&mut self, col: usize, row: usize) -> TableResult<()> {
        self.table.check_data_cell(col, row)?;
        let layout = self.layout.as_ref().ok_or(TableError::NotComposed)?;
        let cell = self.table.cell(col, row)?;
        self.check_fits(col, row, cell.value())?;

        let width = layout.column_width(col);
        let lines = cell.lines();
        let padded = pad_vertical_center(&lines, layout.row_height(row))?;
        let (x, y) = layout.cell_origin(col, row)?;

        let defaults = (self.config.default_background, self.config.default_foreground);
        let background = cell.background().or(defaults.0);
        let foreground = cell.foreground().or(defaults.1);

        trace!("Refresh cell ({}, {}) at ({}, {})", col, row, x, y);

        for (i, line) in padded.iter().enumerate() {
            self.surface.set_cursor(x, y + i)?;
            self.surface.set_colors(background, foreground)?;
            self.surface.write_str(&pad_center(line, width))?;
            self.surface.set_colors(defaults.0, defaults.1)?;
            self.surface.set_cursor(0, 0)?;
        }
        self.surface.flush()?;
        Ok(())
    }

    /// Repaint every data cell
    pub fn refresh_all(&mut self) -> TableResult<()> {
        let positions: Vec<(usize, usize)> = self.table.iter().map(|(c, r, _)| (c, r)).collect();
        for (col, row) in positions {
            self.refresh_cell(col, row)?;
        }
        Ok(())
    }

    /// Replace a cell's value and repaint it.
    ///
    /// Once composed, the new value must fit the cell's cached row height
    /// and column width; otherwise nothing changes. Before the first
    /// compose the value is only stored.
    pub fn edit_cell(&mut self, col: usize, row: usize, value: impl fmt::Display) -> TableResult<()> {
        self.table.check_data_cell(col, row)?;
        let value = value.to_string();
        self.check_fits(col, row, &value)?;

        self.table.cell_mut(col, row)?.set_value(value);
        if self.layout.is_some() {
            self.refresh_cell(col, row)?;
        }
        Ok(())
    }

    /// Store colors on a cell without repainting it.
    ///
    /// `None` resets that color to the configured default.
    pub fn change_cell_color(
        &mut self,
        col: usize,
        row: usize,
        background: Option<Color>,
        foreground: Option<Color>,
    ) -> TableResult<()> {
        self.table.cell_mut(col, row)?.set_colors(background, foreground);
        Ok(())
    }

    /// Change colors, then edit the value so the new colors show at once
    pub fn edit_cell_and_color(
        &mut self,
        col: usize,
        row: usize,
        value: impl fmt::Display,
        background: Option<Color>,
        foreground: Option<Color>,
    ) -> TableResult<()> {
        let value = value.to_string();
        self.table.check_data_cell(col, row)?;
        self.check_fits(col, row, &value)?;

        self.change_cell_color(col, row, background, foreground)?;
        self.edit_cell(col, row, value)
    }

    /// Empty a cell and reset its colors
    pub fn clear_cell(&mut self, col: usize, row: usize) -> TableResult<()> {
        self.change_cell_color(col, row, None, None)?;
        self.edit_cell(col, row, "")
    }
}

/// Build the framed table text, one string per screen row
fn compose(table: &Table, layout: &Layout, border: &BorderStyle) -> TableResult<Vec<String>> {
    let widths = layout.column_widths();
    let heights = layout.row_heights();
    let mut frame = Vec::with_capacity(layout.required_size().1);

    frame.push(rule(
        widths,
        border.upper_left,
        border.upper_border,
        border.upper_split,
        border.upper_right,
    ));

    for (row, &height) in heights.iter().enumerate() {
        let columns = (0..widths.len())
            .map(|col| pad_vertical_center(&table.lines(col, row)?, height))
            .collect::<TableResult<Vec<_>>>()?;

        for line in 0..height {
            let mut text = String::new();
            text.push(border.left_border);
            for (col, &width) in widths.iter().enumerate() {
                if col > 0 {
                    text.push(border.split);
                }
                let content = columns[col].get(line).copied().unwrap_or("");
                text.push_str(&pad_center(content, width));
            }
            text.push(border.right_border);
            frame.push(text);
        }

        if row + 1 < heights.len() {
            frame.push(rule(
                widths,
                border.left_split,
                border.middle_border,
                border.middle_split,
                border.right_split,
            ));
        }
    }

    frame.push(rule(
        widths,
        border.lower_left,
        border.lower_border,
        border.lower_split,
        border.lower_right,
    ));
    Ok(frame)
}

/// A horizontal border line
fn rule(widths: &[usize], left: char, fill: char, split: char, right: char) -> String {
    let mut text = String::new();
    text.push(left);
    for (col, &width) in widths.iter().enumerate() {
        if col > 0 {
            text.push(split);
        }
        text.extend(std::iter::repeat(fill).take(width));
    }
    text.push(right);
    text
}
