//! Coverage area names -> catalog area codes

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Area codes as registered in the catalog's "Phạm vi phủ sóng" attribute.
/// Names match the product sheets exactly, misspellings included.
const COVERAGE_AREAS: &[(&str, i64)] = &[
    ("Thailand", 21),
    ("Japan", 27),
    ("Taiwan", 32),
    ("Vietnam", 35),
    ("Netherlands", 49),
    ("Belgium", 50),
    ("Spain", 52),
    ("Estonia", 67),
    ("Asia 10 countries", 98),
    ("USA, Canada", 115),
    ("Madagascar", 125),
    ("Brazil", 22),
    ("Egypt", 24),
    ("India", 25),
    ("Philippines", 31),
    ("UAE", 33),
    ("USA", 34),
    ("HongKong", 36),
    ("Malaysia", 38),
    ("Singapore", 39),
    ("Sri Lanka", 43),
    ("Uzbekistan", 44),
    ("Greece", 48),
    ("France", 51),
    ("Hungary", 53),
    ("Croatia", 54),
    ("Italy", 55),
    ("Switzerland", 57),
    ("Czech", 58),
    ("United Kingdom", 60),
    ("Norway", 63),
    ("Portugal", 70),
    ("Luxembourg", 71),
    ("Republic of Ireland", 72),
    ("Iceland", 73),
    ("Turkey", 77),
    ("Liechtenstein", 79),
    ("Kuwait", 81),
    ("Kazakhstan", 84),
    ("Nicaragua", 87),
    ("Peru", 89),
    ("Argentina", 90),
    ("Chile", 91),
    ("Columbia", 92),
    ("Ecuador", 93),
    ("French Guiana", 94),
    ("Mexico", 96),
    ("Canada", 97),
    ("Asia 19 countries", 100),
    ("China Mainland, Macao", 105),
    ("Singapore, Malaysia, Thailand", 113),
    ("South America 11 countries", 161),
    ("Denmark", 61),
    ("Lithuania", 65),
    ("Latvia", 66),
    ("Australia, New Zealand", 102),
    ("Brazil, Chile", 103),
    ("China Mainland, Hong Kong, Macao", 104),
    ("Europe 33 Countries", 106),
    ("Austria", 107),
    ("Indonesia, Singapore, Malaysia, Thailand", 109),
    ("Jordan, Kuwait, Oman", 110),
    ("Singapore, Malaysia, Indonesia", 112),
    ("World Primary 70 Countries", 117),
    ("Saudi Arabia", 118),
    ("Qatar", 119),
    ("New Zealand", 120),
    ("Morocco", 121),
    ("Tunisia", 122),
    ("Seychelles", 123),
    ("Kenya", 124),
    ("South Africa", 126),
    ("Costa Rica", 127),
    ("Macau", 37),
    ("Cambodia", 40),
    ("Mongolia", 30),
    ("New Zealnd", 47),
    ("Slovakia", 59),
    ("Poland", 68),
    ("Malta", 74),
    ("Cyprus", 75),
    ("Jordan", 80),
    ("Russia", 83),
    ("Asia 14 countries", 99),
    ("China Mainland", 23),
    ("Israel", 26),
    ("Korea", 28),
    ("Laos", 29),
    ("Indonesia", 41),
    ("Pakistan", 42),
    ("Kyrgyzstan", 45),
    ("Australia", 46),
    ("Romania", 56),
    ("Sweden", 62),
    ("Finland", 64),
    ("Germany", 69),
    ("Bulgari", 76),
    ("Slovenia", 78),
    ("Oman", 82),
    ("Martinique Island", 85),
    ("El Salvado", 86),
    ("Panama", 88),
    ("Uruguay", 95),
    ("Asia 6 countries", 101),
    ("Hong Kong, Macao", 108),
    ("Russia, Kazakhstan, Uzbekistan, Pakistan", 111),
    ("South America 12 countries", 114),
    ("USA, Mexico", 116),
];

static AREA_CODES: Lazy<HashMap<&'static str, i64>> =
    Lazy::new(|| COVERAGE_AREAS.iter().copied().collect());

/// Catalog code for a coverage area name, if known
pub fn area_code(name: &str) -> Option<i64> {
    AREA_CODES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_areas() {
        assert_eq!(area_code("Vietnam"), Some(35));
        assert_eq!(area_code("Europe 33 Countries"), Some(106));
        assert_eq!(area_code("New Zealnd"), Some(47));
        assert_eq!(area_code("USA, Mexico"), Some(116));
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert_eq!(area_code("Atlantis"), None);
        assert_eq!(area_code("vietnam"), None);
    }

    #[test]
    fn test_names_unique() {
        assert_eq!(AREA_CODES.len(), COVERAGE_AREAS.len());
    }
}
