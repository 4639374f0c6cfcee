//! The table model
//!
//! A header row of column labels over a rectangular block of cells.
//! Coordinates are `(col, row)` where row 0 is the header and data rows
//! run from 1 to `rows()` inclusive.

use std::fmt;

use super::cell::TableCell;
use crate::error::{TableError, TableResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    labels: Vec<String>,
    /// Data cells (row-major order, header excluded)
    cells: Vec<TableCell>,
}

impl Table {
    /// Create an empty table with the given column labels
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> TableResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(TableError::NoColumns);
        }
        Ok(Self {
            labels,
            cells: Vec::new(),
        })
    }

    /// Append a data row, one value per column
    pub fn push_row<V: fmt::Display>(&mut self, values: impl IntoIterator<Item = V>) -> TableResult<()> {
        let row: Vec<TableCell> = values.into_iter().map(TableCell::new).collect();
        if row.len() != self.columns() {
            return Err(TableError::RowWidthMismatch {
                row: self.rows() + 1,
                expected: self.columns(),
                found: row.len(),
            });
        }
        self.cells.extend(row);
        Ok(())
    }

    /// Build a table from labels and rows in one go
    pub fn from_rows<S, R, V>(labels: impl IntoIterator<Item = S>, rows: impl IntoIterator<Item = R>) -> TableResult<Self>
    where
        S: Into<String>,
        R: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        let mut table = Self::new(labels)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.labels.len()
    }

    /// Number of data rows (header excluded)
    pub fn rows(&self) -> usize {
        self.cells.len() / self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Check a coordinate against the grid, header row included
    pub fn check_bounds(&self, col: usize, row: usize) -> TableResult<()> {
        if col < self.columns() && row <= self.rows() {
            Ok(())
        } else {
            Err(TableError::OutOfBounds {
                col,
                row,
                cols: self.columns(),
                rows: self.rows(),
            })
        }
    }

    /// Check a coordinate names a writable data cell
    pub fn check_data_cell(&self, col: usize, row: usize) -> TableResult<()> {
        self.check_bounds(col, row)?;
        if row == 0 {
            return Err(TableError::HeaderRow { col });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        (row - 1) * self.columns() + col
    }

    /// Get a data cell
    pub fn cell(&self, col: usize, row: usize) -> TableResult<&TableCell> {
        self.check_data_cell(col, row)?;
        Ok(&self.cells[self.index(col, row)])
    }

    /// Get a mutable data cell
    pub fn cell_mut(&mut self, col: usize, row: usize) -> TableResult<&mut TableCell> {
        self.check_data_cell(col, row)?;
        let i = self.index(col, row);
        Ok(&mut self.cells[i])
    }

    /// Display lines at a position; row 0 yields the column label
    pub fn lines(&self, col: usize, row: usize) -> TableResult<Vec<&str>> {
        self.check_bounds(col, row)?;
        if row == 0 {
            Ok(self.labels[col].split('\n').collect())
        } else {
            Ok(self.cells[self.index(col, row)].lines())
        }
    }

    /// Iterate data cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &TableCell)> {
        let cols = self.columns();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % cols, i / cols + 1, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn sample() -> Table {
        Table::from_rows(["X", "Y"], [["1", "2"], ["3", "4\n5"]]).unwrap()
    }

    #[test]
    fn test_table_dimensions() {
        let table = sample();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.labels(), &["X".to_string(), "Y".to_string()]);
    }

    #[test]
    fn test_table_requires_columns() {
        let err = Table::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, TableError::NoColumns));
    }

    #[test]
    fn test_row_width_mismatch() {
        let mut table = Table::new(["A", "B", "C"]).unwrap();
        let err = table.push_row(["1", "2"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowWidthMismatch { row: 1, expected: 3, found: 2 }
        ));
        assert_eq!(table.rows(), 0);
    }

    #[test]
    fn test_lines_include_header() {
        let table = sample();
        assert_eq!(table.lines(1, 0).unwrap(), vec!["Y"]);
        assert_eq!(table.lines(1, 2).unwrap(), vec!["4", "5"]);
    }

    #[test]
    fn test_cell_access_bounds() {
        let mut table = sample();
        assert!(matches!(table.cell(0, 0), Err(TableError::HeaderRow { col: 0 })));
        assert!(matches!(table.cell(2, 1), Err(TableError::OutOfBounds { .. })));
        assert!(matches!(table.lines(0, 3), Err(TableError::OutOfBounds { .. })));

        table.cell_mut(0, 2).unwrap().set_background(Some(Color::Red));
        assert_eq!(table.cell(0, 2).unwrap().background(), Some(Color::Red));
        assert_eq!(table.cell(0, 2).unwrap().value(), "3");
    }

    #[test]
    fn test_iter_positions() {
        let table = sample();
        let positions: Vec<(usize, usize, &str)> =
            table.iter().map(|(c, r, cell)| (c, r, cell.value())).collect();
        assert_eq!(
            positions,
            vec![(0, 1, "1"), (1, 1, "2"), (0, 2, "3"), (1, 2, "4\n5")]
        );
    }
}
