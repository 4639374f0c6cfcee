//! Box-drawing border styles
//!
//! A border style names every character a framed table needs: the four
//! corners, the top and bottom edges with their column splits, the
//! row separator with its crossings, and the vertical borders.

use serde::Deserialize;

use crate::error::{TableError, TableResult};

/// The 15 characters used to frame a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BorderChoice")]
pub struct BorderStyle {
    pub upper_left: char,
    pub upper_border: char,
    pub upper_split: char,
    pub upper_right: char,

    pub left_split: char,
    pub middle_border: char,
    pub middle_split: char,
    pub right_split: char,

    pub lower_left: char,
    pub lower_border: char,
    pub lower_split: char,
    pub lower_right: char,

    pub left_border: char,
    pub split: char,
    pub right_border: char,
}

impl BorderStyle {
    pub const SINGLE: BorderStyle = BorderStyle {
        upper_left: '┌', upper_border: '─', upper_split: '┬', upper_right: '┐',
        left_split: '├', middle_border: '─', middle_split: '┼', right_split: '┤',
        lower_left: '└', lower_border: '─', lower_split: '┴', lower_right: '┘',
        left_border: '│', split: '│', right_border: '│',
    };

    pub const DOUBLE: BorderStyle = BorderStyle {
        upper_left: '╔', upper_border: '═', upper_split: '╦', upper_right: '╗',
        left_split: '╠', middle_border: '═', middle_split: '╬', right_split: '╣',
        lower_left: '╚', lower_border: '═', lower_split: '╩', lower_right: '╝',
        left_border: '║', split: '║', right_border: '║',
    };

    /// Build a style from exactly 15 characters in field order
    pub fn from_chars(chars: &str) -> TableResult<Self> {
        let c: Vec<char> = chars.chars().collect();
        if c.len() != 15 {
            return Err(TableError::InvalidBorder(format!(
                "expected 15 characters, got {}",
                c.len()
            )));
        }
        Ok(Self {
            upper_left: c[0],
            upper_border: c[1],
            upper_split: c[2],
            upper_right: c[3],
            left_split: c[4],
            middle_border: c[5],
            middle_split: c[6],
            right_split: c[7],
            lower_left: c[8],
            lower_border: c[9],
            lower_split: c[10],
            lower_right: c[11],
            left_border: c[12],
            split: c[13],
            right_border: c[14],
        })
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::SINGLE
    }
}

/// Border as written in a table document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BorderChoice {
    Single,
    Double,
    Custom(String),
}

impl TryFrom<BorderChoice> for BorderStyle {
    type Error = TableError;

    fn try_from(source: BorderChoice) -> TableResult<Self> {
        match source {
            BorderChoice::Single => Ok(BorderStyle::SINGLE),
            BorderChoice::Double => Ok(BorderStyle::DOUBLE),
            BorderChoice::Custom(chars) => BorderStyle::from_chars(&chars),
        }
    }
}
