//! Excel I/O for the mapping configuration sheet

mod reader;
mod writer;

pub use reader::read_mapping;
pub use writer::write_default_mapping;

/// Column headers of the mapping sheet
pub mod headers {
    pub const TARGET_FIELD: &str = "KHAI BÁO SẢN PHẨM TRÊN BCSS";
    pub const SOURCE_COLUMN: &str = "MAPPING SẢN PHẨM TRÊN FILE EXCEL VNSKY GỬI";
    pub const NOTE: &str = "GHI CHÚ";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_mapping_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.xlsx");

        write_default_mapping(&path).unwrap();
        let table = read_mapping(&path, None).unwrap();

        assert_eq!(table.len(), writer::default_mapping_rows().len());
        assert_eq!(table.source_column("VAT"), Some("10"));
        assert_eq!(table.source_column("Tên sản phẩm"), Some("Product Name Short"));
        assert_eq!(table.source_column("Loại sản phẩm"), None);
        assert_eq!(
            table.get("Chia sẻ Wifi").and_then(|e| e.note()),
            Some("Cột trong file sản phẩm (support = có)")
        );
        assert!(table.get("THÔNG TIN SẢN PHẨM").is_some());
    }

    #[test]
    fn test_blank_rows_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{},{},{}", headers::TARGET_FIELD, headers::SOURCE_COLUMN, headers::NOTE)
            .unwrap();
        writeln!(file, "Tên sản phẩm,Name,").unwrap();
        writeln!(file, ",,").unwrap();
        writeln!(file, ",Orphan,no target").unwrap();
        writeln!(file, "Tên sản phẩm,Product Name Short,Cột trong file sản phẩm").unwrap();
        drop(file);

        let table = read_mapping(&path, None).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.source_column("Tên sản phẩm"), Some("Product Name Short"));
    }

    #[test]
    fn test_header_only_sheet_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(
            &path,
            format!("{},{},{}\n,,\n", headers::TARGET_FIELD, headers::SOURCE_COLUMN, headers::NOTE),
        )
        .unwrap();

        let err = read_mapping(&path, None).unwrap_err();
        assert!(err.to_string().contains("no field mappings"));
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong.csv");
        std::fs::write(&path, "field,column\nA,B\n").unwrap();

        let err = read_mapping(&path, None).unwrap_err();
        assert!(err.to_string().contains(headers::TARGET_FIELD));
    }
}
