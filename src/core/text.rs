//! Text padding helpers
//!
//! Widths are counted in `char`s; every character is assumed to occupy
//! one terminal column.

use crate::error::{TableError, TableResult};

/// Center `line` in `width` columns.
///
/// Odd padding favours the right side, and a single missing column goes
/// entirely to the right. Lines already at or over `width` come back
/// unchanged.
pub fn pad_center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }

    let deficit = width - len;
    let left = deficit / 2;
    let right = deficit - left;

    let mut out = String::with_capacity(line.len() + deficit);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

/// Center a cell's lines in `height` rows.
///
/// Empty lines are dropped before placement, so a value like `"\nA"`
/// centers as if it were `"A"`. Fails if more than `height` lines are
/// supplied.
pub fn pad_vertical_center<'a>(lines: &[&'a str], height: usize) -> TableResult<Vec<&'a str>> {
    if lines.len() > height {
        return Err(TableError::VerticalOverflow {
            lines: lines.len(),
            height,
        });
    }

    let kept: Vec<&'a str> = lines.iter().copied().filter(|l| !l.is_empty()).collect();
    if kept.len() >= height {
        return Ok(kept);
    }

    let mut out = vec![""; height];
    let start = height / 2 - kept.len() / 2;
    for (i, line) in kept.into_iter().enumerate() {
        out[start + i] = line;
    }
    Ok(out)
}

/// Width of the widest line
pub fn max_line_width(lines: &[&str]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_center_exact_width() {
        for s in ["", "a", "abc", "héllo"] {
            for width in s.chars().count()..s.chars().count() + 6 {
                let out = pad_center(s, width);
                assert_eq!(out.chars().count(), width, "{:?} in {}", s, width);
                assert!(out.contains(s));
            }
        }
    }

    #[test]
    fn test_pad_center_bias() {
        assert_eq!(pad_center("ab", 2), "ab");
        assert_eq!(pad_center("ab", 3), "ab ");
        assert_eq!(pad_center("ab", 4), " ab ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn test_pad_center_no_truncation() {
        assert_eq!(pad_center("toolong", 3), "toolong");
    }

    #[test]
    fn test_pad_vertical_center_positions() {
        assert_eq!(pad_vertical_center(&["a"], 1).unwrap(), vec!["a"]);
        assert_eq!(pad_vertical_center(&["a"], 2).unwrap(), vec!["", "a"]);
        assert_eq!(pad_vertical_center(&["a"], 3).unwrap(), vec!["", "a", ""]);
        assert_eq!(pad_vertical_center(&["a", "b"], 3).unwrap(), vec!["a", "b", ""]);
        assert_eq!(
            pad_vertical_center(&["a", "b"], 4).unwrap(),
            vec!["", "a", "b", ""]
        );
        assert_eq!(
            pad_vertical_center(&["a", "b", "c"], 5).unwrap(),
            vec!["", "a", "b", "c", ""]
        );
    }

    #[test]
    fn test_pad_vertical_center_drops_empty_lines() {
        let out = pad_vertical_center(&["", "x", "", "y"], 4).unwrap();
        assert_eq!(out, vec!["", "x", "y", ""]);

        // Blanks removed, nothing left to center
        assert_eq!(pad_vertical_center(&[""], 2).unwrap(), vec!["", ""]);
    }

    #[test]
    fn test_pad_vertical_center_length_and_order() {
        let lines = ["one", "", "two", "three"];
        for height in lines.len()..lines.len() + 4 {
            let out = pad_vertical_center(&lines, height).unwrap();
            assert_eq!(out.len(), height);
            let kept: Vec<&str> = out.into_iter().filter(|l| !l.is_empty()).collect();
            assert_eq!(kept, vec!["one", "two", "three"]);
        }
    }

    #[test]
    fn test_pad_vertical_center_overflow() {
        let err = pad_vertical_center(&["a", "b", "c"], 2).unwrap_err();
        assert!(matches!(err, TableError::VerticalOverflow { lines: 3, height: 2 }));
    }

    #[test]
    fn test_max_line_width() {
        assert_eq!(max_line_width(&["ab", "abcd", ""]), 4);
        assert_eq!(max_line_width(&[]), 0);
    }
}
