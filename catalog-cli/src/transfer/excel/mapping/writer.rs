//! Write the default mapping configuration workbook

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::transfer::{DESCRIPTION_EN, DESCRIPTION_VI, FIXED_TEXT_NOTE};

use super::headers;

/// Column indices (must match the header constants)
mod cols {
    pub const TARGET_FIELD: u16 = 0;
    pub const SOURCE_COLUMN: u16 = 1;
    pub const NOTE: u16 = 2;
}

const PRODUCT_COLUMN: &str = "Cột trong file sản phẩm";
const FIXED_VALUE: &str = "Giá trị cố định";

/// Rows of the default configuration for outbound SIM products:
/// (target field, source column, note)
pub fn default_mapping_rows() -> Vec<(&'static str, Option<&'static str>, Option<&'static str>)> {
    vec![
        ("THÔNG TIN SẢN PHẨM", None, None),
        (
            "Mã sản phẩm",
            Some("SKUID"),
            Some("Cột trong file sản phẩm - kết hợp với Days làm productCode"),
        ),
        ("Tên sản phẩm", Some("Product Name Short"), Some(PRODUCT_COLUMN)),
        ("Nhóm sản phẩm", Some("SIM outbound"), Some(FIXED_VALUE)),
        ("Đơn vị tính", Some("Cái"), Some(FIXED_TEXT_NOTE)),
        ("SKY package code", Some("Trống"), None),
        ("Khối lượng", Some("Trống"), None),
        ("Mô tả tiếng Anh", Some(DESCRIPTION_EN), Some(FIXED_TEXT_NOTE)),
        ("Mô tả tiếng Việt", Some(DESCRIPTION_VI), Some(FIXED_TEXT_NOTE)),
        ("Loại sản phẩm", None, None),
        ("Số ngày sử dụng", Some("Days"), Some(PRODUCT_COLUMN)),
        (
            "Dung lượng tốc độ cao",
            Some("High Speed Data (MB or GB or GB/day)"),
            Some(PRODUCT_COLUMN),
        ),
        ("Loại gói", Some("Package type"), Some(PRODUCT_COLUMN)),
        ("eKYC (Xác minh danh tính)", Some("Không bắt buộc"), Some(FIXED_VALUE)),
        ("Hết tốc độ cao giảm xuống", Some("Throttled Speed (kbps)"), Some(PRODUCT_COLUMN)),
        (
            "Chia sẻ Wifi",
            Some("Hotspot sharing"),
            Some("Cột trong file sản phẩm (support = có)"),
        ),
        ("Loại SIM", Some("Support eSIM/Sim Card"), Some(PRODUCT_COLUMN)),
        ("Phạm vi phủ sóng", Some("National Area"), Some(PRODUCT_COLUMN)),
        ("SKUID", Some("SKUID"), Some(PRODUCT_COLUMN)),
        ("Nhà cung cấp", Some("Telco"), Some(PRODUCT_COLUMN)),
        ("Giá sản phẩm sau thuế", None, None),
        ("Giá hàng hóa", Some("Giá bán 26.5 ( THM đề xuất)"), Some(PRODUCT_COLUMN)),
        ("Thuế suất", None, None),
        ("VAT", Some("10"), Some(FIXED_TEXT_NOTE)),
    ]
}

/// Write the default mapping configuration to an .xlsx file
pub fn write_default_mapping(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Mapping")?;
    write_header(worksheet)?;

    for (idx, (target, source, note)) in default_mapping_rows().into_iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, cols::TARGET_FIELD, target)?;
        if let Some(source) = source {
            // Numeric literals (the VAT rate) are stored as numbers
            match source.parse::<f64>() {
                Ok(n) => worksheet.write_number(row, cols::SOURCE_COLUMN, n)?,
                Err(_) => worksheet.write_string(row, cols::SOURCE_COLUMN, source)?,
            };
        }
        if let Some(note) = note {
            worksheet.write_string(row, cols::NOTE, note)?;
        }
    }

    worksheet.set_column_width(cols::TARGET_FIELD, 32)?;
    worksheet.set_column_width(cols::SOURCE_COLUMN, 45)?;
    worksheet.set_column_width(cols::NOTE, 55)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Wrote default mapping configuration to {}", path.display());
    Ok(())
}

fn write_header(ws: &mut Worksheet) -> Result<()> {
    let bold = Format::new().set_bold();
    ws.write_string_with_format(0, cols::TARGET_FIELD, headers::TARGET_FIELD, &bold)?;
    ws.write_string_with_format(0, cols::SOURCE_COLUMN, headers::SOURCE_COLUMN, &bold)?;
    ws.write_string_with_format(0, cols::NOTE, headers::NOTE, &bold)?;
    Ok(())
}
