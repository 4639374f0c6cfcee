//! boxgrid - bordered terminal tables
//!
//! Draws a table of multi-line text cells inside box-drawing borders on a
//! character-cell terminal, then edits and recolors individual cells in
//! place without redrawing the rest of the screen.
//!
//! # Overview
//!
//! boxgrid provides:
//! - A table model: header labels over a grid of colored cells
//! - A layout pass computing column widths and row heights
//! - A frame composer with single, double, or custom borders
//! - Surfaces to draw on: an ANSI terminal or an in-memory buffer
//! - A JSON document format for describing tables
//! - A key parser for driving a cell cursor
//!
//! # Example
//!
//! ```
//! use boxgrid::{BufferSurface, Color, RenderConfig, Table, TableDisplay};
//!
//! let table = Table::from_rows(["Round", "Pick"], [["1st", "QB"], ["2nd", "WR"]]).unwrap();
//! let mut display = TableDisplay::new(table, RenderConfig::default(), BufferSurface::new(80, 24)).unwrap();
//! display.layout_and_compose().unwrap();
//!
//! display.change_cell_color(1, 1, Some(Color::Red), None).unwrap();
//! display.edit_cell(1, 1, "RB").unwrap();
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod document;
pub mod error;
pub mod input;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{pad_center, pad_vertical_center, BorderStyle, Color, Layout, Table, TableCell};
pub use config::RenderConfig;
pub use display::TableDisplay;
pub use document::{CellSource, TableDocument};
pub use error::{ErrorKind, TableError, TableResult};
pub use input::{InputEvent, InputParser, Key};
pub use surface::{AnsiSurface, BufferSurface, Surface};
