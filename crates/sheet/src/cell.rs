use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed cell value read from a worksheet.
///
/// Formulas never appear here: workbooks are read with their last computed
/// values, so a formula cell surfaces as whatever it evaluated to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check whether the cell holds something meaningful.
    ///
    /// Null, `false`, zero and the empty string are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::String(s) => !s.is_empty(),
        }
    }

    /// Try to get the value as an integer
    ///
    /// Floats truncate toward zero; strings must hold a whole number.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            CellValue::Float(_) => None,
            CellValue::Bool(b) => Some(i64::from(*b)),
            CellValue::String(s) => s.trim().parse().ok(),
            CellValue::Null => None,
        }
    }

    /// Try to get the value as a finite float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        let value = match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::String(s) => s.trim().parse().ok(),
            CellValue::Null => None,
        };
        value.filter(|f| f.is_finite())
    }

    /// Integer value of the cell, or `default` when it is falsy or not numeric.
    #[must_use]
    pub fn int_or(&self, default: i64) -> i64 {
        if self.is_truthy() {
            self.as_int().unwrap_or(default)
        } else {
            default
        }
    }

    /// Get the value as a string
    ///
    /// Whole floats keep their decimal point (`2.0`) and booleans read
    /// `True`/`False`, matching how the workbook's labels print elsewhere.
    #[must_use]
    pub fn as_str(&self) -> String {
        self.to_string()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) if fl.fract() == 0.0 && fl.abs() < 1e16 => write!(f, "{fl:.1}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
