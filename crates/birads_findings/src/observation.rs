// Observation records: the unchecked draft a form submits and the validated
// observation the classification engine consumes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::finding::{AsymmetryType, Distribution, FindingType, Margin, Morphology, Shape};

/// Observation as entered by the reader, before any consistency checks.
///
/// Sub-fields are flat and optional, mirroring the data-entry form. Call
/// [`ObservationDraft::validate`] to obtain an [`Observation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationDraft {
    pub exam_complete: bool,
    pub finding_types: BTreeSet<FindingType>,
    pub shape: Option<Shape>,
    pub margin: Option<Margin>,
    pub morphology: Option<Morphology>,
    pub distribution: Option<Distribution>,
    pub asym_type: Option<AsymmetryType>,
    pub prior_surgery: bool,
    pub biopsy_proven_malignancy: bool,
    pub skin_retraction: bool,
    pub nipple_retraction: bool,
}

impl ObservationDraft {
    /// Empty draft for a complete exam.
    pub fn complete() -> Self {
        Self {
            exam_complete: true,
            ..Self::default()
        }
    }

    pub fn with_mass(mut self, shape: Shape, margin: Margin) -> Self {
        self.finding_types.insert(FindingType::Mass);
        self.shape = Some(shape);
        self.margin = Some(margin);
        self
    }

    pub fn with_calcification(
        mut self,
        morphology: Morphology,
        distribution: Option<Distribution>,
    ) -> Self {
        self.finding_types.insert(FindingType::Calcification);
        self.morphology = Some(morphology);
        self.distribution = distribution;
        self
    }

    pub fn with_asymmetry(mut self, asym_type: AsymmetryType) -> Self {
        self.finding_types.insert(FindingType::Asymmetry);
        self.asym_type = Some(asym_type);
        self
    }

    pub fn with_architectural_distortion(mut self) -> Self {
        self.finding_types
            .insert(FindingType::ArchitecturalDistortion);
        self
    }

    pub fn with_prior_surgery(mut self) -> Self {
        self.prior_surgery = true;
        self
    }

    pub fn with_biopsy_proven_malignancy(mut self) -> Self {
        self.biopsy_proven_malignancy = true;
        self
    }

    pub fn with_skin_retraction(mut self) -> Self {
        self.skin_retraction = true;
        self
    }

    pub fn with_nipple_retraction(mut self) -> Self {
        self.nipple_retraction = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MassFinding {
    pub shape: Shape,
    pub margin: Margin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalcificationFinding {
    pub morphology: Morphology,
    pub distribution: Option<Distribution>,
}

/// A structurally consistent observation.
///
/// Only produced by validation, so a sub-record is present exactly when its
/// finding type is selected. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Observation {
    pub(crate) exam_complete: bool,
    pub(crate) finding_types: BTreeSet<FindingType>,
    pub(crate) mass: Option<MassFinding>,
    pub(crate) calcification: Option<CalcificationFinding>,
    pub(crate) asymmetry: Option<AsymmetryType>,
    pub(crate) prior_surgery: bool,
    pub(crate) biopsy_proven_malignancy: bool,
    pub(crate) skin_retraction: bool,
    pub(crate) nipple_retraction: bool,
}

impl Observation {
    pub fn exam_complete(&self) -> bool {
        self.exam_complete
    }

    pub fn finding_types(&self) -> &BTreeSet<FindingType> {
        &self.finding_types
    }

    pub fn has(&self, finding: FindingType) -> bool {
        self.finding_types.contains(&finding)
    }

    pub fn has_findings(&self) -> bool {
        !self.finding_types.is_empty()
    }

    pub fn mass(&self) -> Option<&MassFinding> {
        self.mass.as_ref()
    }

    pub fn calcification(&self) -> Option<&CalcificationFinding> {
        self.calcification.as_ref()
    }

    pub fn asymmetry(&self) -> Option<AsymmetryType> {
        self.asymmetry
    }

    pub fn prior_surgery(&self) -> bool {
        self.prior_surgery
    }

    pub fn biopsy_proven_malignancy(&self) -> bool {
        self.biopsy_proven_malignancy
    }

    pub fn skin_retraction(&self) -> bool {
        self.skin_retraction
    }

    pub fn nipple_retraction(&self) -> bool {
        self.nipple_retraction
    }

    /// Skin or nipple retraction was reported.
    pub fn has_retraction(&self) -> bool {
        self.skin_retraction || self.nipple_retraction
    }
}
