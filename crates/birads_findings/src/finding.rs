// Mammographic finding vocabulary.
// Variant names double as the wire identifiers used in observation documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level finding categories a reader can select for an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FindingType {
    Mass,
    Calcification,
    ArchitecturalDistortion,
    Asymmetry,
}

impl FindingType {
    pub const ALL: [FindingType; 4] = [
        FindingType::Mass,
        FindingType::Calcification,
        FindingType::ArchitecturalDistortion,
        FindingType::Asymmetry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FindingType::Mass => "Mass",
            FindingType::Calcification => "Calcification",
            FindingType::ArchitecturalDistortion => "Architectural distortion",
            FindingType::Asymmetry => "Asymmetry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Round,
    Oval,
    Irregular,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Round, Shape::Oval, Shape::Irregular];

    pub fn label(self) -> &'static str {
        match self {
            Shape::Round => "Round",
            Shape::Oval => "Oval",
            Shape::Irregular => "Irregular",
        }
    }

    /// Margins a data-entry form offers once this shape is chosen.
    ///
    /// A circumscribed margin is only meaningful for round or oval masses; a
    /// spiculated or irregular margin only for irregular ones. Validation
    /// enforces the first constraint, the second is guidance for forms.
    pub fn offered_margins(self) -> &'static [Margin] {
        match self {
            Shape::Round | Shape::Oval => &[Margin::Circumscribed, Margin::Microlobulated],
            Shape::Irregular => &[Margin::Microlobulated, Margin::Irregular, Margin::Spiculated],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Margin {
    Circumscribed,
    Microlobulated,
    Irregular,
    Spiculated,
}

impl Margin {
    pub const ALL: [Margin; 4] = [
        Margin::Circumscribed,
        Margin::Microlobulated,
        Margin::Irregular,
        Margin::Spiculated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Margin::Circumscribed => "Circumscribed",
            Margin::Microlobulated => "Microlobulated",
            Margin::Irregular => "Irregular",
            Margin::Spiculated => "Spiculated",
        }
    }
}

/// Calcification morphology, suspicious and typically benign forms together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Morphology {
    Amorphous,
    Pleomorphic,
    LinearBranching,
    RoundPunctate,
    CoarsePopcorn,
    EggshellRim,
    MilkOfCalcium,
    Skin,
    Vascular,
}

impl Morphology {
    pub const ALL: [Morphology; 9] = [
        Morphology::Amorphous,
        Morphology::Pleomorphic,
        Morphology::LinearBranching,
        Morphology::RoundPunctate,
        Morphology::CoarsePopcorn,
        Morphology::EggshellRim,
        Morphology::MilkOfCalcium,
        Morphology::Skin,
        Morphology::Vascular,
    ];

    /// Typically benign morphologies. These never carry a distribution.
    pub const BENIGN: [Morphology; 5] = [
        Morphology::CoarsePopcorn,
        Morphology::EggshellRim,
        Morphology::MilkOfCalcium,
        Morphology::Skin,
        Morphology::Vascular,
    ];

    pub fn is_benign(self) -> bool {
        Self::BENIGN.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            Morphology::Amorphous => "Amorphous",
            Morphology::Pleomorphic => "Pleomorphic",
            Morphology::LinearBranching => "Linear/Branching",
            Morphology::RoundPunctate => "Round/Punctate",
            Morphology::CoarsePopcorn => "Coarse/Popcorn",
            Morphology::EggshellRim => "Eggshell/Rim",
            Morphology::MilkOfCalcium => "Milk of Calcium",
            Morphology::Skin => "Skin",
            Morphology::Vascular => "Vascular",
        }
    }

    /// Lowercase identifier derived from the label, e.g. `coarse_popcorn`.
    pub fn slug(self) -> String {
        self.label()
            .chars()
            .map(|c| match c {
                '/' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect()
    }

    /// Distributions a data-entry form offers for this morphology.
    pub fn offered_distributions(self) -> &'static [Distribution] {
        match self {
            m if m.is_benign() => &[],
            Morphology::LinearBranching => &[Distribution::Segmental, Distribution::Linear],
            _ => &Distribution::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    Grouped,
    Segmental,
    Linear,
    Diffuse,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Grouped,
        Distribution::Segmental,
        Distribution::Linear,
        Distribution::Diffuse,
    ];

    /// Segmental and linear distributions follow a duct and raise suspicion.
    pub fn is_ductal(self) -> bool {
        matches!(self, Distribution::Segmental | Distribution::Linear)
    }

    pub fn label(self) -> &'static str {
        match self {
            Distribution::Grouped => "Grouped",
            Distribution::Segmental => "Segmental",
            Distribution::Linear => "Linear",
            Distribution::Diffuse => "Diffuse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsymmetryType {
    SingleProjection,
    Focal,
    Developing,
    Global,
    DensityOnly,
}

impl AsymmetryType {
    pub const ALL: [AsymmetryType; 5] = [
        AsymmetryType::SingleProjection,
        AsymmetryType::Focal,
        AsymmetryType::Developing,
        AsymmetryType::Global,
        AsymmetryType::DensityOnly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AsymmetryType::SingleProjection => "Single projection",
            AsymmetryType::Focal => "Focal",
            AsymmetryType::Developing => "Developing",
            AsymmetryType::Global => "Global",
            AsymmetryType::DensityOnly => "Density only",
        }
    }
}

macro_rules! display_by_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_by_label!(FindingType, Shape, Margin, Morphology, Distribution, AsymmetryType);
