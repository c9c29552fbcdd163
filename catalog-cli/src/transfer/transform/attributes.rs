//! Catalog attribute slots and their value post-processing

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transfer::AttributeValue;

/// The fixed product characteristics of an outbound SIM product.
///
/// Discriminants are the catalog's `productCategoryAttributeId`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    HighSpeedData = 101,
    PackageType = 102,
    Ekyc = 103,
    ThrottledSpeed = 104,
    HotspotSharing = 105,
    SimType = 106,
    CoverageArea = 107,
    Skuid = 108,
    ValidityDays = 109,
    Provider = 110,
}

impl AttributeSlot {
    /// All slots in payload order
    pub const ALL: [AttributeSlot; 10] = [
        AttributeSlot::HighSpeedData,
        AttributeSlot::PackageType,
        AttributeSlot::Ekyc,
        AttributeSlot::ThrottledSpeed,
        AttributeSlot::HotspotSharing,
        AttributeSlot::SimType,
        AttributeSlot::CoverageArea,
        AttributeSlot::Skuid,
        AttributeSlot::ValidityDays,
        AttributeSlot::Provider,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Target field label in the mapping sheet
    pub fn field_label(self) -> &'static str {
        match self {
            AttributeSlot::HighSpeedData => "Dung lượng tốc độ cao",
            AttributeSlot::PackageType => "Loại gói",
            AttributeSlot::Ekyc => "eKYC (Xác minh danh tính)",
            AttributeSlot::ThrottledSpeed => "Hết tốc độ cao giảm xuống",
            AttributeSlot::HotspotSharing => "Chia sẻ Wifi",
            AttributeSlot::SimType => "Loại SIM",
            AttributeSlot::CoverageArea => "Phạm vi phủ sóng",
            AttributeSlot::Skuid => "SKUID",
            AttributeSlot::ValidityDays => "Số ngày sử dụng",
            AttributeSlot::Provider => "Nhà cung cấp",
        }
    }

    /// Apply the slot-specific clean-up to a resolved value
    pub fn post_process(self, value: AttributeValue) -> AttributeValue {
        match self {
            AttributeSlot::ThrottledSpeed => format_throttle(value),
            AttributeSlot::SimType => map_sim_type(value),
            AttributeSlot::CoverageArea | AttributeSlot::ValidityDays => coerce_integer(value),
            AttributeSlot::HighSpeedData => match value {
                AttributeValue::Text(ref s) if s.trim() == UNLIMITED => AttributeValue::Null,
                other => other,
            },
            _ => value,
        }
    }
}

impl std::fmt::Display for AttributeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.field_label(), self.id())
    }
}

const UNLIMITED: &str = "∞";
const NO_THROTTLE: &str = "-1";

static SPEED_WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mbps|kbps)").expect("speed regex is valid")
});

/// Throttled speed: unlimited markers become null, bare numbers are kbps,
/// and any "<n>mbps" / "<n> kbps" inside the text becomes "<n> Mbps" / "<n> Kbps".
fn format_throttle(value: AttributeValue) -> AttributeValue {
    let text = match value {
        AttributeValue::Text(text) => text,
        AttributeValue::Int(i) => return AttributeValue::Text(format!("{} Kbps", i)),
        AttributeValue::Null => return AttributeValue::Null,
    };

    let trimmed = text.trim();
    if trimmed == UNLIMITED || trimmed == NO_THROTTLE {
        return AttributeValue::Null;
    }

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return match trimmed.parse::<u64>() {
            Ok(n) => AttributeValue::Text(format!("{} Kbps", n)),
            Err(_) => AttributeValue::Text(text),
        };
    }

    if !SPEED_WITH_UNIT.is_match(&text) {
        return AttributeValue::Text(text);
    }

    // Rewrite every "<n><unit>" in place, keeping the surrounding text
    let normalized = SPEED_WITH_UNIT.replace_all(trimmed, |caps: &regex::Captures| {
        let unit = if caps[2].eq_ignore_ascii_case("mbps") {
            "Mbps"
        } else {
            "Kbps"
        };
        format!("{} {}", &caps[1], unit)
    });
    AttributeValue::Text(normalized.into_owned())
}

/// SIM type: "eSIM" -> "2", "Sim Card" -> "1"
fn map_sim_type(value: AttributeValue) -> AttributeValue {
    let code = match &value {
        AttributeValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "esim" => Some("2"),
            "sim card" => Some("1"),
            _ => None,
        },
        _ => None,
    };
    code.map_or(value, AttributeValue::text)
}

/// Integer coercion through a float parse; anything unparsable is null
fn coerce_integer(value: AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::Int(_) | AttributeValue::Null => value,
        AttributeValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => AttributeValue::Int(f.trunc() as i64),
            _ => AttributeValue::Null,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> AttributeValue {
        AttributeValue::text(s)
    }

    #[test]
    fn test_slot_ids() {
        let ids: Vec<u32> = AttributeSlot::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, (101..=110).collect::<Vec<_>>());
        assert_eq!(AttributeSlot::SimType.to_string(), "Loại SIM (106)");
    }

    #[test]
    fn test_throttle() {
        let slot = AttributeSlot::ThrottledSpeed;
        assert_eq!(slot.post_process(text("128")), text("128 Kbps"));
        assert_eq!(slot.post_process(text("∞")), AttributeValue::Null);
        assert_eq!(slot.post_process(text("-1")), AttributeValue::Null);
        assert_eq!(slot.post_process(text("1Mbps")), text("1 Mbps"));
        assert_eq!(slot.post_process(text("2 mbps")), text("2 Mbps"));
        assert_eq!(slot.post_process(text("512kbps")), text("512 Kbps"));
        assert_eq!(slot.post_process(text("1.5 MBPS")), text("1.5 Mbps"));
        assert_eq!(slot.post_process(text("")), text(""));
        assert_eq!(slot.post_process(text("unlimited")), text("unlimited"));
        assert_eq!(slot.post_process(text("512kbps/day")), text("512 Kbps/day"));
        assert_eq!(slot.post_process(text("Max 1Mbps")), text("Max 1 Mbps"));
        assert_eq!(slot.post_process(text("1Mbps after 3GB")), text("1 Mbps after 3GB"));
        assert_eq!(slot.post_process(text("3GB then 128 KBPS")), text("3GB then 128 Kbps"));
    }

    #[test]
    fn test_sim_type() {
        let slot = AttributeSlot::SimType;
        assert_eq!(slot.post_process(text("eSIM")), text("2"));
        assert_eq!(slot.post_process(text("ESIM ")), text("2"));
        assert_eq!(slot.post_process(text("Sim Card")), text("1"));
        assert_eq!(slot.post_process(text("both")), text("both"));
    }

    #[test]
    fn test_integer_slots() {
        for slot in [AttributeSlot::CoverageArea, AttributeSlot::ValidityDays] {
            assert_eq!(slot.post_process(text("30")), AttributeValue::Int(30));
            assert_eq!(slot.post_process(text(" 7.0 ")), AttributeValue::Int(7));
            assert_eq!(slot.post_process(text("")), AttributeValue::Null);
            assert_eq!(slot.post_process(text("Atlantis")), AttributeValue::Null);
            assert_eq!(slot.post_process(text("NaN")), AttributeValue::Null);
            assert_eq!(slot.post_process(AttributeValue::Int(35)), AttributeValue::Int(35));
            assert_eq!(slot.post_process(AttributeValue::Null), AttributeValue::Null);
        }
    }

    #[test]
    fn test_high_speed_data() {
        let slot = AttributeSlot::HighSpeedData;
        assert_eq!(slot.post_process(text("∞")), AttributeValue::Null);
        assert_eq!(slot.post_process(text("5GB")), text("5GB"));
    }

    #[test]
    fn test_other_slots_untouched() {
        assert_eq!(AttributeSlot::Provider.post_process(text("∞")), text("∞"));
        assert_eq!(AttributeSlot::Skuid.post_process(text("")), text(""));
    }
}
