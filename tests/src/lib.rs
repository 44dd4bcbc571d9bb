//! Shared fixtures for the workspace integration tests.

use birads_engine::{classify, BiradsCategory};
use birads_findings::{
    AsymmetryType, Distribution, FindingType, Margin, Morphology, Observation, ObservationDraft,
    Shape,
};
use proptest::prelude::*;
use proptest::sample::select;

/// Validates `draft`, panicking with the validation error if it is rejected.
pub fn observe(draft: ObservationDraft) -> Observation {
    match draft.validate() {
        Ok(obs) => obs,
        Err(err) => panic!("fixture should be valid: {err}"),
    }
}

pub fn category_of(draft: ObservationDraft) -> BiradsCategory {
    classify(&observe(draft)).category
}

pub fn mass() -> impl Strategy<Value = (Shape, Margin)> {
    (select(Shape::ALL.to_vec()), select(Margin::ALL.to_vec())).prop_filter(
        "circumscribed margin needs a round or oval mass",
        |&(shape, margin)| !(shape == Shape::Irregular && margin == Margin::Circumscribed),
    )
}

pub fn calcification() -> impl Strategy<Value = (Morphology, Option<Distribution>)> {
    (
        select(Morphology::ALL.to_vec()),
        proptest::option::of(select(Distribution::ALL.to_vec())),
    )
        .prop_map(|(morphology, distribution)| {
            let distribution = if morphology.is_benign() {
                None
            } else {
                distribution
            };
            (morphology, distribution)
        })
}

pub fn asymmetry() -> impl Strategy<Value = AsymmetryType> {
    select(AsymmetryType::ALL.to_vec())
}

/// Flags on a draft that are independent of the selected findings.
#[derive(Debug, Clone, Copy)]
pub struct Flags {
    pub exam_complete: bool,
    pub prior_surgery: bool,
    pub biopsy_proven_malignancy: bool,
    pub skin_retraction: bool,
    pub nipple_retraction: bool,
}

pub fn flags() -> impl Strategy<Value = Flags> {
    any::<[bool; 5]>().prop_map(|[exam, surgery, biopsy, skin, nipple]| Flags {
        exam_complete: exam,
        prior_surgery: surgery,
        biopsy_proven_malignancy: biopsy,
        skin_retraction: skin,
        nipple_retraction: nipple,
    })
}

/// Any draft that passes validation.
pub fn valid_draft() -> impl Strategy<Value = ObservationDraft> {
    (
        flags(),
        proptest::option::of(mass()),
        proptest::option::of(calcification()),
        proptest::option::of(asymmetry()),
        any::<bool>(),
    )
        .prop_map(|(flags, mass, calcification, asymmetry, distortion)| {
            let mut draft = ObservationDraft {
                exam_complete: flags.exam_complete,
                prior_surgery: flags.prior_surgery,
                biopsy_proven_malignancy: flags.biopsy_proven_malignancy,
                skin_retraction: flags.skin_retraction,
                nipple_retraction: flags.nipple_retraction,
                ..ObservationDraft::default()
            };
            if let Some((shape, margin)) = mass {
                draft = draft.with_mass(shape, margin);
            }
            if let Some((morphology, distribution)) = calcification {
                draft = draft.with_calcification(morphology, distribution);
            }
            if let Some(asym_type) = asymmetry {
                draft = draft.with_asymmetry(asym_type);
            }
            if distortion {
                draft = draft.with_architectural_distortion();
            }
            draft
        })
}

/// Drafts with a complete exam, no biopsy-proven malignancy and at least one
/// finding, i.e. the ones that reach the finding rules.
pub fn assessed_draft() -> impl Strategy<Value = ObservationDraft> {
    valid_draft().prop_map(|mut draft| {
        draft.exam_complete = true;
        draft.biopsy_proven_malignancy = false;
        if draft.finding_types.is_empty() {
            draft.finding_types.insert(FindingType::ArchitecturalDistortion);
        }
        draft
    })
}
