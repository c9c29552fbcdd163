//! Spreadsheet loader: workbooks (via calamine) and CSV files as product rows

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Reader, open_workbook_auto};

use crate::transfer::{CellValue, ProductRow};

use super::values::{cell_value, dedupe_headers, header_name};

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            "csv" => Ok(SourceFormat::Csv),
            _ => bail!(
                "Unsupported file type '{}': expected .xlsx, .xlsm, .xls, .ods or .csv",
                path.display()
            ),
        }
    }
}

/// A loaded sheet: headers in column order plus one row per data line
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<ProductRow>,
}

impl SheetData {
    /// First `n` rows
    pub fn preview(&self, n: usize) -> &[ProductRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sheet names of a workbook. A CSV file counts as one sheet named after the file.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    match SourceFormat::detect(path)? {
        SourceFormat::Workbook => {
            let workbook = open_workbook_auto(path)
                .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
            Ok(workbook.sheet_names())
        }
        SourceFormat::Csv => Ok(vec![csv_sheet_name(path)]),
    }
}

/// Load a sheet as product rows
///
/// `sheet` defaults to the first sheet. `header_row` is the 0-based sheet row
/// holding the column headers; rows above it are ignored.
pub fn load_sheet(path: &Path, sheet: Option<&str>, header_row: usize) -> Result<SheetData> {
    let (name, grid) = match SourceFormat::detect(path)? {
        SourceFormat::Workbook => read_workbook_grid(path, sheet)?,
        SourceFormat::Csv => (csv_sheet_name(path), read_csv_grid(path)?),
    };

    let data = build_sheet(name, grid, header_row)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    log::info!(
        "Loaded {} rows ({} columns) from {} [{}]",
        data.rows.len(),
        data.headers.len(),
        path.display(),
        data.name
    );
    Ok(data)
}

fn read_workbook_grid(path: &Path, sheet: Option<&str>) -> Result<(String, Vec<Vec<CellValue>>)> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(wanted) => {
            if !names.iter().any(|n| n == wanted) {
                bail!(
                    "Sheet '{}' not found in {} (available: {})",
                    wanted,
                    path.display(),
                    names.join(", ")
                );
            }
            wanted.to_string()
        }
        None => names.first().context("Workbook has no sheets")?.clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    // calamine ranges start at the first used cell; pad so row indices match the sheet
    let row_offset = range.start().map_or(0, |(r, _)| r as usize);
    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset];
    grid.extend(range.rows().map(|row| row.iter().map(cell_value).collect()));

    Ok((sheet_name, grid))
}

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut grid = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Invalid CSV record at line {}", idx + 1))?;
        grid.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(grid)
}

fn csv_sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("csv")
        .to_string()
}

fn build_sheet(name: String, grid: Vec<Vec<CellValue>>, header_row: usize) -> Result<SheetData> {
    let mut lines = grid.into_iter().skip(header_row);
    let Some(header_cells) = lines.next() else {
        bail!("Header row {} is past the end of sheet '{}'", header_row, name);
    };

    let headers = dedupe_headers(
        header_cells
            .iter()
            .enumerate()
            .map(|(col, cell)| header_name(Some(cell), col))
            .collect(),
    );

    let rows = lines
        .map(|cells| {
            let mut row = ProductRow::new();
            for (col, header) in headers.iter().enumerate() {
                row.push(header.clone(), cells.get(col).cloned().unwrap_or_default());
            }
            row
        })
        .collect();

    Ok(SheetData {
        name,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_products_xlsx(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("products.xlsx");
        let mut workbook = Workbook::new();

        let ws = workbook.add_worksheet();
        ws.set_name("Products").unwrap();
        ws.write_string(0, 0, "SKUID").unwrap();
        ws.write_string(0, 1, "Days").unwrap();
        ws.write_string(0, 2, "Telco").unwrap();
        ws.write_string(1, 0, "JP-01").unwrap();
        ws.write_number(1, 1, 7).unwrap();
        ws.write_string(1, 2, "Docomo").unwrap();
        ws.write_string(2, 0, "KR-02").unwrap();
        ws.write_number(2, 1, 30).unwrap();

        let notes = workbook.add_worksheet();
        notes.set_name("Notes").unwrap();
        notes.write_string(0, 0, "free text").unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(SourceFormat::detect(Path::new("a.XLSX")).unwrap(), SourceFormat::Workbook);
        assert_eq!(SourceFormat::detect(Path::new("a.ods")).unwrap(), SourceFormat::Workbook);
        assert_eq!(SourceFormat::detect(Path::new("a.csv")).unwrap(), SourceFormat::Csv);
        assert!(SourceFormat::detect(Path::new("a.json")).is_err());
        assert!(SourceFormat::detect(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_xlsx() {
        let dir = TempDir::new().unwrap();
        let path = write_products_xlsx(&dir);

        assert_eq!(sheet_names(&path).unwrap(), vec!["Products", "Notes"]);

        let data = load_sheet(&path, None, 0).unwrap();
        assert_eq!(data.name, "Products");
        assert_eq!(data.headers, vec!["SKUID", "Days", "Telco"]);
        assert_eq!(data.len(), 2);

        let first = &data.rows[0];
        assert_eq!(first.columns().collect::<Vec<_>>(), vec!["SKUID", "Days", "Telco"]);
        assert_eq!(first.get("Days").and_then(|v| v.as_text()).as_deref(), Some("7"));
        assert!(data.rows[1].get("Telco").unwrap().is_blank());

        assert_eq!(data.preview(1).len(), 1);
        assert_eq!(data.preview(50).len(), 2);
    }

    #[test]
    fn test_load_named_sheet() {
        let dir = TempDir::new().unwrap();
        let path = write_products_xlsx(&dir);

        let notes = load_sheet(&path, Some("Notes"), 0).unwrap();
        assert_eq!(notes.headers, vec!["free text"]);
        assert!(notes.is_empty());

        let err = load_sheet(&path, Some("Missing"), 0).unwrap_err();
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_load_csv_with_header_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Report generated 2025-05-30").unwrap();
        writeln!(file, "SKUID,Days,SKUID").unwrap();
        writeln!(file, "VN-01,15,dup").unwrap();
        writeln!(file, "VN-02,,").unwrap();
        drop(file);

        assert_eq!(sheet_names(&path).unwrap(), vec!["export"]);

        let data = load_sheet(&path, None, 1).unwrap();
        assert_eq!(data.headers, vec!["SKUID", "Days", "SKUID.1"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.rows[0].get("SKUID.1"), Some(&CellValue::from("dup")));
        assert_eq!(data.rows[1].get("Days"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_header_row_past_end() {
        let grid = vec![vec![CellValue::from("A")]];
        assert!(build_sheet("s".into(), grid, 3).is_err());
    }
}
