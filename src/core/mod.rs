//! Core table model
//!
//! - Cell: one table cell with optional colors
//! - Table: header labels over a grid of cells
//! - Layout: column widths and row heights
//! - BorderStyle: box-drawing character sets
//! - text: padding helpers

pub mod border;
pub mod cell;
pub mod layout;
pub mod table;
pub mod text;

pub use border::BorderStyle;
pub use cell::{Color, TableCell};
pub use layout::Layout;
pub use table::Table;
pub use text::{pad_center, pad_vertical_center};
