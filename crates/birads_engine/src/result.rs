use serde::{Deserialize, Serialize};

use crate::category::BiradsCategory;
use crate::rules::{RuleFiring, RuleId};

/// Outcome of classifying one observation.
///
/// `image_key` is an opaque identifier for an illustrative example image;
/// resolving it to a file or URL is up to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: BiradsCategory,
    pub explanation: String,
    pub management: String,
    #[serde(default)]
    pub reference_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_note: Option<String>,
}

/// A result together with every rule that wrote to it, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub result: ClassificationResult,
    pub trace: Vec<RuleFiring>,
}

impl Assessment {
    /// The rule whose write determined the final category.
    pub fn deciding_rule(&self) -> Option<RuleId> {
        self.trace
            .iter()
            .rev()
            .find(|firing| firing.category.is_some())
            .map(|firing| firing.rule)
    }
}
