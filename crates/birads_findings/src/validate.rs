use log::debug;

use crate::finding::{FindingType, Margin, Morphology, Shape};
use crate::observation::{CalcificationFinding, MassFinding, Observation, ObservationDraft};

/// Structural inconsistency in a submitted observation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{field}' is only valid when {finding} is among the findings")]
    SubFieldWithoutFinding {
        field: &'static str,
        finding: FindingType,
    },
    #[error("{finding} finding requires '{field}'")]
    MissingSubField {
        field: &'static str,
        finding: FindingType,
    },
    #[error("{morphology} calcifications do not take a distribution")]
    DistributionForBenignMorphology { morphology: Morphology },
    #[error("a circumscribed margin requires a round or oval mass")]
    CircumscribedIrregularMass,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Checks a draft and turns it into an immutable [`Observation`].
///
/// Only structural invariants are enforced: sub-fields must belong to a
/// selected finding type, required sub-fields must be present, benign
/// calcifications take no distribution, and a circumscribed margin needs a
/// round or oval mass. Clinical plausibility is not checked.
pub fn validate(draft: ObservationDraft) -> Result<Observation> {
    let result = check(&draft).map(|_| build(draft));
    if let Err(err) = &result {
        debug!("observation rejected: {err}");
    }
    result
}

impl ObservationDraft {
    pub fn validate(self) -> Result<Observation> {
        validate(self)
    }
}

impl TryFrom<ObservationDraft> for Observation {
    type Error = ValidationError;

    fn try_from(draft: ObservationDraft) -> Result<Self> {
        validate(draft)
    }
}

fn check(draft: &ObservationDraft) -> Result<()> {
    let selected = |finding| draft.finding_types.contains(&finding);

    let sub_fields = [
        ("shape", draft.shape.is_some(), FindingType::Mass),
        ("margin", draft.margin.is_some(), FindingType::Mass),
        ("morphology", draft.morphology.is_some(), FindingType::Calcification),
        ("distribution", draft.distribution.is_some(), FindingType::Calcification),
        ("asym_type", draft.asym_type.is_some(), FindingType::Asymmetry),
    ];
    for (field, present, finding) in sub_fields {
        if present && !selected(finding) {
            return Err(ValidationError::SubFieldWithoutFinding { field, finding });
        }
    }

    if selected(FindingType::Mass) {
        let shape = require(draft.shape, "shape", FindingType::Mass)?;
        let margin = require(draft.margin, "margin", FindingType::Mass)?;
        if margin == Margin::Circumscribed && shape == Shape::Irregular {
            return Err(ValidationError::CircumscribedIrregularMass);
        }
    }

    if selected(FindingType::Calcification) {
        let morphology = require(draft.morphology, "morphology", FindingType::Calcification)?;
        if morphology.is_benign() && draft.distribution.is_some() {
            return Err(ValidationError::DistributionForBenignMorphology { morphology });
        }
    }

    if selected(FindingType::Asymmetry) {
        require(draft.asym_type, "asym_type", FindingType::Asymmetry)?;
    }

    Ok(())
}

fn require<T>(value: Option<T>, field: &'static str, finding: FindingType) -> Result<T> {
    value.ok_or(ValidationError::MissingSubField { field, finding })
}

// Assumes `check` passed: sub-fields are present exactly for selected findings.
fn build(draft: ObservationDraft) -> Observation {
    let mass = draft
        .shape
        .zip(draft.margin)
        .map(|(shape, margin)| MassFinding { shape, margin });
    let calcification = draft
        .morphology
        .map(|morphology| CalcificationFinding {
            morphology,
            distribution: draft.distribution,
        });

    Observation {
        exam_complete: draft.exam_complete,
        finding_types: draft.finding_types,
        mass,
        calcification,
        asymmetry: draft.asym_type,
        prior_surgery: draft.prior_surgery,
        biopsy_proven_malignancy: draft.biopsy_proven_malignancy,
        skin_retraction: draft.skin_retraction,
        nipple_retraction: draft.nipple_retraction,
    }
}
