//! Cell conversion between calamine data and row values

use calamine::Data;

use crate::transfer::CellValue;

/// Convert a calamine cell into a row value
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // Dates and durations are kept as their display text
        other => CellValue::Text(other.to_string()),
    }
}

/// Header cell text, with pandas-style names for blank headers
pub fn header_name(cell: Option<&CellValue>, col: usize) -> String {
    match cell.and_then(|c| c.as_text()) {
        Some(s) if !s.trim().is_empty() => s,
        _ => format!("Unnamed: {}", col),
    }
}

/// Make repeated headers unique by suffixing ".1", ".2", ...
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", header, n);
            n += 1;
        }
        seen.push(candidate);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_values() {
        assert_eq!(cell_value(&Data::String("SKUID".into())), CellValue::from("SKUID"));
        assert_eq!(cell_value(&Data::Float(26.5)), CellValue::Float(26.5));
        assert_eq!(cell_value(&Data::Int(10)), CellValue::Int(10));
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::Float(30.0)).as_text().as_deref(),
            Some("30")
        );
    }

    #[test]
    fn test_headers() {
        assert_eq!(header_name(Some(&CellValue::from("Days")), 0), "Days");
        assert_eq!(header_name(Some(&CellValue::Empty), 3), "Unnamed: 3");
        assert_eq!(header_name(None, 4), "Unnamed: 4");

        let headers = dedupe_headers(vec!["A".into(), "B".into(), "A".into(), "A".into()]);
        assert_eq!(headers, vec!["A", "B", "A.1", "A.2"]);
    }
}
