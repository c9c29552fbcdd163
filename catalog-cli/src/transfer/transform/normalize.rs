//! Cell value normalization rules shared by all catalog fields

use crate::transfer::CellValue;

/// Placeholder the mapping sheets use for "leave empty"
pub const EMPTY_PLACEHOLDER: &str = "Trống";
/// Note marker meaning the column holds yes/no support answers
pub const SUPPORT_YES_NO_NOTE: &str = "support = có";
/// Phrase meaning "not required"
pub const NOT_REQUIRED: &str = "không bắt buộc";

const TRUE_FLAG: &str = "1";
const FALSE_FLAG: &str = "0";

/// Normalize a raw cell to the string the catalog expects, or `None` for "no value"
///
/// Rules, first match wins:
/// - empty, blank, or `Trống` -> `None`
/// - text containing "support" (any case) -> `"1"`
/// - note contains `support = có` -> `"1"` for có/yes, else `"0"`
/// - text containing `không bắt buộc` -> `"0"`
/// - anything else is stringified unchanged
pub fn normalize(raw: &CellValue, note: Option<&str>) -> Option<String> {
    if raw.is_blank() {
        return None;
    }
    if raw.as_str().map(str::trim) == Some(EMPTY_PLACEHOLDER) {
        return None;
    }

    if let Some(text) = raw.as_str() {
        let lowered = text.trim().to_lowercase();
        if lowered.contains("support") {
            return Some(TRUE_FLAG.to_string());
        }
        if note.is_some_and(|n| n.to_lowercase().contains(SUPPORT_YES_NO_NOTE)) {
            let yes = lowered == "có" || lowered == "yes";
            return Some(if yes { TRUE_FLAG } else { FALSE_FLAG }.to_string());
        }
        if lowered.contains(NOT_REQUIRED) {
            return Some(FALSE_FLAG.to_string());
        }
    }

    raw.as_text()
}
