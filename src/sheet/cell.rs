//! `Cell` — a tagged scalar or vector value.
//!
//! Cells hold one of a small set of value shapes and convert between them
//! leniently: `"42"` reads as an integer, integers read as floats, `0` and
//! the empty string are falsey. Conversions that make no sense (a list as a
//! char) yield `None` rather than guessing.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collections::GrowVec;

/// A tagged scalar or vector value for [`Sheet`](super::Sheet) grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// A boolean.
    Bool(bool),
    /// Free-form text. The default cell is empty text.
    Text(String),
    /// A vector of integers.
    List(GrowVec<i64>),
}

impl Cell {
    /// Reads the cell as an integer, coercing where the value permits.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Float(v) => num_traits::cast(*v),
            Cell::Char(c) => c.to_digit(10).map(i64::from),
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::List(_) => None,
        }
    }

    /// Reads the cell as a float, coercing where the value permits.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => num_traits::cast(*v),
            Cell::Float(v) => Some(*v),
            Cell::Char(c) => c.to_digit(10).map(f64::from),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::List(_) => None,
        }
    }

    /// Reads the cell as a boolean. Numbers are truthy when non-zero, text
    /// when it spells `true`/`false` or a number.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::Int(v) => Some(*v != 0),
            Cell::Float(v) => Some(*v != 0.0),
            Cell::Char(c) => match c {
                '1' => Some(true),
                '0' => Some(false),
                _ => None,
            },
            Cell::Text(s) => match s.trim() {
                "true" => Some(true),
                "false" | "" => Some(false),
                other => other.parse::<i64>().ok().map(|v| v != 0),
            },
            Cell::List(_) => None,
        }
    }

    /// Reads the cell as a single character.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Cell::Char(c) => Some(*c),
            Cell::Int(v @ 0..=9) => char::from_digit(*v as u32, 10),
            Cell::Text(s) => {
                let mut chars = s.chars();
                let first = chars.next()?;
                chars.next().is_none().then_some(first)
            }
            _ => None,
        }
    }

    /// Reads the cell as an integer list.
    pub fn as_list(&self) -> Option<&GrowVec<i64>> {
        match self {
            Cell::List(v) => Some(v),
            _ => None,
        }
    }

    /// Renders the cell the way [`Display`](fmt::Display) does.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(i64::from(v))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<char> for Cell {
    fn from(v: char) -> Self {
        Cell::Char(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<GrowVec<i64>> for Cell {
    fn from(v: GrowVec<i64>) -> Self {
        Cell::List(v)
    }
}

impl From<&[i64]> for Cell {
    fn from(v: &[i64]) -> Self {
        Cell::List(v.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Char(c) => write!(f, "{c}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Text(s) => f.write_str(s),
            Cell::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl FromStr for Cell {
    type Err = core::convert::Infallible;

    /// Parses the most specific shape the text admits; anything else is text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "true" {
            return Ok(Cell::Bool(true));
        }
        if trimmed == "false" {
            return Ok(Cell::Bool(false));
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Cell::Int(v));
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Ok(Cell::Float(v));
        }
        if let Some(inner) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let items: Result<GrowVec<i64>, _> = inner
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::parse::<i64>)
                .collect::<Result<Vec<_>, _>>()
                .map(|v| v.into_iter().collect());
            if let Ok(items) = items {
                return Ok(Cell::List(items));
            }
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Cell::Char(c));
        }
        Ok(Cell::Text(s.to_string()))
    }
}
