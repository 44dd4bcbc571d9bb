use birads_engine::{classify_traced, Assessment, ClassificationResult, RuleFiring, RuleId};
use birads_findings::{ObservationDraft, ValidationError};
use serde::Serialize;

/// Why a submitted observation could not be assessed.
#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    #[error("invalid observation JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid observation: {0}")]
    Invalid(#[from] ValidationError),
}

impl AssessError {
    /// Process exit code for this failure: 1 for a rejected observation,
    /// 2 for input that could not be decoded.
    pub fn exit_code(&self) -> i32 {
        match self {
            AssessError::Decode(_) => 2,
            AssessError::Invalid(_) => 1,
        }
    }
}

/// Machine-readable outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub result: ClassificationResult,
    pub style_key: String,
    pub deciding_rule: Option<RuleId>,
    pub trace: Vec<RuleFiring>,
}

impl From<Assessment> for Report {
    fn from(assessment: Assessment) -> Self {
        Report {
            style_key: assessment.result.category.style_key(),
            deciding_rule: assessment.deciding_rule(),
            result: assessment.result,
            trace: assessment.trace,
        }
    }
}

/// Validates and classifies a draft in one step.
pub fn assess(draft: ObservationDraft) -> Result<Assessment, ValidationError> {
    let obs = draft.validate()?;
    Ok(classify_traced(&obs))
}

pub fn parse_draft(source: &str) -> Result<ObservationDraft, serde_json::Error> {
    serde_json::from_str(source)
}

/// Decodes an [`ObservationDraft`] JSON document and assesses it.
pub fn assess_json(source: &str) -> Result<Report, AssessError> {
    let draft = parse_draft(source)?;
    Ok(assess(draft)?.into())
}
