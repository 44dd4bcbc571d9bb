use serde::{Deserialize, Serialize};
use std::fmt;

/// BI-RADS assessment category.
///
/// Serialized as `BIRADS0` .. `BIRADS6`, displayed as `BI-RADS 0` .. `BI-RADS 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BiradsCategory {
    /// Incomplete: needs additional imaging or comparison.
    Birads0,
    /// Negative.
    Birads1,
    /// Benign.
    Birads2,
    /// Probably benign.
    Birads3,
    /// Low suspicion for malignancy.
    Birads4A,
    /// Moderate suspicion for malignancy.
    Birads4B,
    /// High suspicion for malignancy.
    Birads4C,
    /// Highly suggestive of malignancy.
    Birads5,
    /// Known biopsy-proven malignancy.
    Birads6,
}

impl BiradsCategory {
    pub const ALL: [BiradsCategory; 9] = [
        BiradsCategory::Birads0,
        BiradsCategory::Birads1,
        BiradsCategory::Birads2,
        BiradsCategory::Birads3,
        BiradsCategory::Birads4A,
        BiradsCategory::Birads4B,
        BiradsCategory::Birads4C,
        BiradsCategory::Birads5,
        BiradsCategory::Birads6,
    ];

    /// Code after the "BI-RADS" prefix, e.g. `4A`.
    pub fn code(self) -> &'static str {
        match self {
            BiradsCategory::Birads0 => "0",
            BiradsCategory::Birads1 => "1",
            BiradsCategory::Birads2 => "2",
            BiradsCategory::Birads3 => "3",
            BiradsCategory::Birads4A => "4A",
            BiradsCategory::Birads4B => "4B",
            BiradsCategory::Birads4C => "4C",
            BiradsCategory::Birads5 => "5",
            BiradsCategory::Birads6 => "6",
        }
    }

    /// Main category number; the 4A/4B/4C subdivisions all map to 4.
    pub fn ordinal(self) -> u8 {
        match self {
            BiradsCategory::Birads0 => 0,
            BiradsCategory::Birads1 => 1,
            BiradsCategory::Birads2 => 2,
            BiradsCategory::Birads3 => 3,
            BiradsCategory::Birads4A | BiradsCategory::Birads4B | BiradsCategory::Birads4C => 4,
            BiradsCategory::Birads5 => 5,
            BiradsCategory::Birads6 => 6,
        }
    }

    /// Style token a renderer can map to a result-card look, e.g. `birads-4a`.
    pub fn style_key(self) -> String {
        format!("birads-{}", self.code().to_ascii_lowercase())
    }
}

impl fmt::Display for BiradsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BI-RADS {}", self.code())
    }
}
