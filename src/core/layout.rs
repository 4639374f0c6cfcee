//! Table layout
//!
//! Column widths and row heights derived from cell content. The layout is
//! the only thing partial redraws consult to find a cell on screen, so it
//! is computed once per compose and cached by the display.

use super::table::Table;
use super::text::max_line_width;
use crate::config::RenderConfig;
use crate::error::{TableError, TableResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Width of each column, padding included
    column_widths: Vec<usize>,
    /// Height of each row, header first
    row_heights: Vec<usize>,
}

impl Layout {
    /// Measure every label and cell of `table`
    pub fn compute(table: &Table, config: &RenderConfig) -> TableResult<Self> {
        if config.even_row_heights && table.rows() == 0 {
            return Err(TableError::EmptyAxis { axis: "rows" });
        }

        let mut column_widths = vec![0; table.columns()];
        let mut row_heights = vec![0; table.rows() + 1];

        for (row, height) in row_heights.iter_mut().enumerate() {
            for (col, width) in column_widths.iter_mut().enumerate() {
                let lines = table.lines(col, row)?;
                *width = (*width).max(max_line_width(&lines));
                *height = (*height).max(lines.len());
            }
        }

        for width in &mut column_widths {
            *width += config.padding;
        }

        if config.even_row_heights {
            let max = row_heights.iter().copied().max().unwrap_or(0);
            row_heights.fill(max);
        }
        if config.even_column_widths {
            let max = column_widths.iter().copied().max().unwrap_or(0);
            column_widths.fill(max);
        }

        Ok(Self {
            column_widths,
            row_heights,
        })
    }

    /// Build a layout from known sizes
    pub fn from_sizes(column_widths: Vec<usize>, row_heights: Vec<usize>) -> Self {
        Self {
            column_widths,
            row_heights,
        }
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Row heights, header row first
    pub fn row_heights(&self) -> &[usize] {
        &self.row_heights
    }

    pub fn column_width(&self, col: usize) -> usize {
        self.column_widths[col]
    }

    pub fn row_height(&self, row: usize) -> usize {
        self.row_heights[row]
    }

    fn check(&self, col: usize, row: usize) -> TableResult<()> {
        if col < self.column_widths.len() && row < self.row_heights.len() {
            Ok(())
        } else {
            Err(TableError::OutOfBounds {
                col,
                row,
                cols: self.column_widths.len(),
                rows: self.row_heights.len().saturating_sub(1),
            })
        }
    }

    /// Total (width, height) of the framed table in characters
    pub fn required_size(&self) -> (usize, usize) {
        let width = 2 + self.column_widths.iter().sum::<usize>() + self.column_widths.len() - 1;
        let height = 2 + self.row_heights.iter().sum::<usize>() + self.row_heights.len() - 1;
        (width, height)
    }

    /// Cursor anchor for a cell.
    ///
    /// `x` is the first content column. `y` is the sum of the heights of
    /// rows `0..=row` plus one separator per row, less one for the header;
    /// it sits `row_height - 2` lines below the cell's first content line.
    pub fn cell_screen_position(&self, col: usize, row: usize) -> TableResult<(usize, usize)> {
        self.check(col, row)?;
        let x = self.column_widths[..col].iter().sum::<usize>() + col + 1;
        let y = (self.row_heights[..=row].iter().sum::<usize>() + row).saturating_sub(1);
        Ok((x, y))
    }

    /// Top-left character of a cell's content area
    pub fn cell_origin(&self, col: usize, row: usize) -> TableResult<(usize, usize)> {
        self.check(col, row)?;
        let x = self.column_widths[..col].iter().sum::<usize>() + col + 1;
        let y = self.row_heights[..row].iter().sum::<usize>() + row + 1;
        Ok((x, y))
    }
}
