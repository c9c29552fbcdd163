//! Spreadsheet cell values as read from product and mapping sheets

use serde::{Deserialize, Serialize};

/// A raw cell value from a product or mapping sheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty cell (serialized as null)
    #[default]
    Empty,
    /// Text cell
    Text(String),
    /// Whole number
    Int(i64),
    /// Floating point number (Excel stores most numbers this way)
    Float(f64),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    /// Empty cells and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Borrow the text of a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stringify the value; `None` only for `Empty`
    ///
    /// Whole floats render without a fractional part so `30.0` reads as `"30"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(format_float(*f)),
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }

    /// Numeric view of the cell, parsing text when needed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Convert to JSON for request bodies and reports
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Empty => serde_json::Value::Null,
            CellValue::Text(s) => serde_json::Value::String(s.clone()),
            CellValue::Int(i) => serde_json::json!(*i),
            CellValue::Float(f) => serde_json::json!(*f),
            CellValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }

    /// Parse from a JSON value (single-product input)
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::Empty
                }
            }
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                CellValue::Text(json.to_string())
            }
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            other => write!(f, "{}", other.as_text().unwrap_or_default()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}
