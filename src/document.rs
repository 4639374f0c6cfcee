//! Table documents
//!
//! JSON description of a table and how to render it:
//!
//! ```json
//! {
//!   "columns": ["Round", "QB", "WR"],
//!   "rows": [
//!     ["1st", ["J. Smith", "Ohio State", "$9,000,000"], null],
//!     ["2nd", "TBD", 42]
//!   ],
//!   "config": {"padding": 2, "border": "double"}
//! }
//! ```
//!
//! A cell may be a string (split on '\n'), an array of lines, a number,
//! a boolean, or null for an empty cell. `config` is optional.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::RenderConfig;
use crate::core::Table;
use crate::error::TableResult;

/// A cell value as written in a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
    Number(serde_json::Number),
    Flag(bool),
    Empty(()),
}

impl fmt::Display for CellSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSource::Text(s) => f.write_str(s),
            CellSource::Lines(lines) => f.write_str(&lines.join("\n")),
            CellSource::Number(n) => write!(f, "{}", n),
            CellSource::Flag(b) => write!(f, "{}", b),
            CellSource::Empty(()) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableDocument {
    /// Column labels, shown in the header row
    pub columns: Vec<String>,
    /// Data rows, one value per column
    #[serde(default)]
    pub rows: Vec<Vec<CellSource>>,
    #[serde(default)]
    pub config: RenderConfig,
}

impl TableDocument {
    pub fn from_json(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document file
    pub fn load(path: impl AsRef<Path>) -> TableResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Split into a populated table and its render configuration
    pub fn into_parts(self) -> TableResult<(Table, RenderConfig)> {
        let table = Table::from_rows(self.columns, self.rows)?;
        Ok((table, self.config))
    }
}
