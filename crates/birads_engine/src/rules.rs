//! The ordered BI-RADS rule cascade.
//!
//! Every rule is a plain function from the current [`Accumulator`] and the
//! observation to a [`Step`]: `Continue` hands the (possibly rewritten)
//! accumulator to the next rule, `Break` ends evaluation. [`CASCADE`] fixes
//! the order, and later writes replace earlier ones:
//!
//! 1. exam completeness gate (terminal)
//! 2. biopsy-proven malignancy override (terminal)
//! 3. baseline for an exam without findings
//! 4. mass, by margin
//! 5. calcification, replacing any mass result
//! 6. asymmetry, only without mass or calcification findings
//! 7. architectural distortion, forcing or upgrading the category
//! 8. skin/nipple retraction, the final override

use std::fmt;
use std::ops::ControlFlow;

use birads_findings::{AsymmetryType, Distribution, FindingType, Margin, Morphology, Observation};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::category::BiradsCategory;
use crate::references as refs;
use crate::result::{Assessment, ClassificationResult};

pub const CO_OCCURRING_ASYMMETRY_NOTE: &str =
    "Asymmetry observed alongside other findings; did not change category.";

pub const ROUTINE_SCREENING: &str = "Routine screening";
pub const BIOPSY_RECOMMENDED: &str = "Biopsy recommended";
pub const SHORT_INTERVAL_FOLLOW_UP: &str = "6-month follow-up mammogram";
pub const ADDITIONAL_PROJECTIONS: &str = "Additional mammographic projections";
pub const ADDITIONAL_IMAGING: &str =
    "Additional imaging and/or comparison with prior examinations";
pub const BIOPSY_OR_SURGERY: &str = "Biopsy / surgical excision";
pub const TREATMENT_PLANNING: &str = "Treatment planning";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    ExamCompleteness,
    BiopsyProven,
    Baseline,
    Mass,
    Calcification,
    Asymmetry,
    ArchitecturalDistortion,
    Retraction,
}

impl RuleId {
    pub fn name(self) -> &'static str {
        match self {
            RuleId::ExamCompleteness => "exam_completeness",
            RuleId::BiopsyProven => "biopsy_proven",
            RuleId::Baseline => "baseline",
            RuleId::Mass => "mass",
            RuleId::Calcification => "calcification",
            RuleId::Asymmetry => "asymmetry",
            RuleId::ArchitecturalDistortion => "architectural_distortion",
            RuleId::Retraction => "retraction",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One write to the accumulator. `category` is `None` when the rule only
/// attached a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFiring {
    pub rule: RuleId,
    pub category: Option<BiradsCategory>,
}

/// The fields a single branch writes in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub category: BiradsCategory,
    pub explanation: String,
    pub management: String,
    pub reference_detail: String,
    pub image_key: Option<String>,
}

impl Verdict {
    pub fn new(
        category: BiradsCategory,
        explanation: impl Into<String>,
        management: &str,
        reference_detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            explanation: explanation.into(),
            management: management.to_string(),
            reference_detail: reference_detail.into(),
            image_key: None,
        }
    }

    pub fn with_image(mut self, key: impl Into<String>) -> Self {
        self.image_key = Some(key.into());
        self
    }
}

/// Working state threaded through the cascade for a single classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    category: Option<BiradsCategory>,
    explanation: String,
    management: String,
    reference_detail: String,
    image_key: Option<String>,
    extra_note: Option<String>,
    trace: Vec<RuleFiring>,
}

impl Accumulator {
    pub fn category(&self) -> Option<BiradsCategory> {
        self.category
    }

    pub fn extra_note(&self) -> Option<&str> {
        self.extra_note.as_deref()
    }

    pub fn trace(&self) -> &[RuleFiring] {
        &self.trace
    }

    /// Replaces category, explanation, management, reference and image key.
    /// A previously attached note is kept.
    pub fn write(mut self, rule: RuleId, verdict: Verdict) -> Self {
        match self.category {
            Some(previous) if previous != verdict.category => {
                debug!("{rule}: {previous} overridden by {}", verdict.category)
            }
            _ => debug!("{rule}: {}", verdict.category),
        }
        self.category = Some(verdict.category);
        self.explanation = verdict.explanation;
        self.management = verdict.management;
        self.reference_detail = verdict.reference_detail;
        self.image_key = verdict.image_key;
        self.trace.push(RuleFiring {
            rule,
            category: Some(verdict.category),
        });
        self
    }

    pub fn annotate(mut self, rule: RuleId, note: &str) -> Self {
        debug!("{rule}: note attached");
        self.extra_note = Some(note.to_string());
        self.trace.push(RuleFiring {
            rule,
            category: None,
        });
        self
    }

    /// Final result, or `None` if no rule ever set a category.
    pub fn finish(self) -> Option<Assessment> {
        let category = self.category?;
        Some(Assessment {
            result: ClassificationResult {
                category,
                explanation: self.explanation,
                management: self.management,
                reference_detail: self.reference_detail,
                image_key: self.image_key,
                extra_note: self.extra_note,
            },
            trace: self.trace,
        })
    }
}

pub type Step = ControlFlow<Accumulator, Accumulator>;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub apply: fn(Accumulator, &Observation) -> Step,
}

pub const CASCADE: [Rule; 8] = [
    Rule {
        id: RuleId::ExamCompleteness,
        apply: exam_completeness_gate,
    },
    Rule {
        id: RuleId::BiopsyProven,
        apply: biopsy_proven_override,
    },
    Rule {
        id: RuleId::Baseline,
        apply: baseline,
    },
    Rule {
        id: RuleId::Mass,
        apply: mass,
    },
    Rule {
        id: RuleId::Calcification,
        apply: calcification,
    },
    Rule {
        id: RuleId::Asymmetry,
        apply: asymmetry,
    },
    Rule {
        id: RuleId::ArchitecturalDistortion,
        apply: architectural_distortion,
    },
    Rule {
        id: RuleId::Retraction,
        apply: retraction,
    },
];

fn exam_completeness_gate(acc: Accumulator, obs: &Observation) -> Step {
    if obs.exam_complete() {
        return ControlFlow::Continue(acc);
    }
    ControlFlow::Break(acc.write(
        RuleId::ExamCompleteness,
        Verdict::new(
            BiradsCategory::Birads0,
            "Additional imaging/comparison required.",
            ADDITIONAL_IMAGING,
            "",
        ),
    ))
}

// Completeness is not re-checked here; the gate above has already run.
fn biopsy_proven_override(acc: Accumulator, obs: &Observation) -> Step {
    if !obs.biopsy_proven_malignancy() {
        return ControlFlow::Continue(acc);
    }
    ControlFlow::Break(acc.write(
        RuleId::BiopsyProven,
        Verdict::new(
            BiradsCategory::Birads6,
            "Biopsy-proven malignancy.",
            TREATMENT_PLANNING,
            refs::BIOPSY_PROVEN,
        ),
    ))
}

fn baseline(acc: Accumulator, obs: &Observation) -> Step {
    if obs.has_findings() {
        return ControlFlow::Continue(acc);
    }
    ControlFlow::Continue(acc.write(
        RuleId::Baseline,
        Verdict::new(
            BiradsCategory::Birads1,
            "No findings on mammography. Negative mammogram.",
            ROUTINE_SCREENING,
            refs::NEGATIVE,
        ),
    ))
}

// Shape only narrows which margins are offered; the margin decides.
fn mass(acc: Accumulator, obs: &Observation) -> Step {
    let Some(mass) = obs.mass() else {
        return ControlFlow::Continue(acc);
    };
    let verdict = match mass.margin {
        Margin::Circumscribed => Verdict::new(
            BiradsCategory::Birads2,
            "Oval/round circumscribed mass, typical benign pattern.",
            ROUTINE_SCREENING,
            refs::MASS_CIRCUMSCRIBED,
        )
        .with_image("birads2_mass_circumscribed"),
        Margin::Microlobulated => Verdict::new(
            BiradsCategory::Birads4A,
            "Microlobulated margin, low suspicion.",
            BIOPSY_RECOMMENDED,
            refs::MASS_MICROLOBULATED,
        )
        .with_image("birads4a_mass_microlobulated"),
        Margin::Irregular => Verdict::new(
            BiradsCategory::Birads4B,
            "Irregular margin, moderate suspicion.",
            BIOPSY_RECOMMENDED,
            refs::MASS_IRREGULAR,
        )
        .with_image("birads4b_mass_irregular"),
        Margin::Spiculated => Verdict::new(
            BiradsCategory::Birads4C,
            "Spiculated margin, high suspicion.",
            BIOPSY_RECOMMENDED,
            refs::MASS_SPICULATED,
        )
        .with_image("birads4c_mass_spiculated"),
    };
    ControlFlow::Continue(acc.write(RuleId::Mass, verdict))
}

fn calcification(acc: Accumulator, obs: &Observation) -> Step {
    let Some(calc) = obs.calcification() else {
        return ControlFlow::Continue(acc);
    };
    let ductal = calc.distribution.is_some_and(Distribution::is_ductal);
    let verdict = match calc.morphology {
        benign @ (Morphology::CoarsePopcorn
        | Morphology::EggshellRim
        | Morphology::MilkOfCalcium
        | Morphology::Skin
        | Morphology::Vascular) => Verdict::new(
            BiradsCategory::Birads2,
            format!("{} calcifications, typically benign.", benign.label()),
            ROUTINE_SCREENING,
            refs::benign_calcification(benign.label()),
        )
        .with_image(format!("birads2_calc_{}", benign.slug())),
        Morphology::RoundPunctate if calc.distribution == Some(Distribution::Diffuse) => {
            Verdict::new(
                BiradsCategory::Birads2,
                "Diffuse round/punctate calcifications, benign.",
                ROUTINE_SCREENING,
                refs::PUNCTATE_DIFFUSE,
            )
            .with_image("birads2_calc_punctate_diffuse")
        }
        Morphology::RoundPunctate => Verdict::new(
            BiradsCategory::Birads3,
            "Grouped round/punctate calcifications, probably benign.",
            SHORT_INTERVAL_FOLLOW_UP,
            refs::PUNCTATE_GROUPED,
        )
        .with_image("birads3_calc_punctate_grouped"),
        Morphology::Amorphous if ductal => Verdict::new(
            BiradsCategory::Birads4B,
            "Amorphous calcifications in segmental/linear distribution, moderate suspicion.",
            BIOPSY_RECOMMENDED,
            refs::AMORPHOUS_DUCTAL,
        )
        .with_image("birads4b_calc_amorphous_segmental"),
        Morphology::Amorphous => Verdict::new(
            BiradsCategory::Birads4A,
            "Amorphous calcifications, low suspicion.",
            BIOPSY_RECOMMENDED,
            refs::AMORPHOUS,
        )
        .with_image("birads4a_calc_amorphous"),
        Morphology::Pleomorphic if ductal => Verdict::new(
            BiradsCategory::Birads4C,
            "Pleomorphic calcifications in segmental/linear distribution, high suspicion.",
            BIOPSY_RECOMMENDED,
            refs::PLEOMORPHIC_DUCTAL,
        )
        .with_image("birads4c_calc_pleomorphic_segmental"),
        Morphology::Pleomorphic => Verdict::new(
            BiradsCategory::Birads4B,
            "Pleomorphic calcifications, moderate suspicion.",
            BIOPSY_RECOMMENDED,
            refs::PLEOMORPHIC,
        )
        .with_image("birads4b_calc_pleomorphic"),
        Morphology::LinearBranching => Verdict::new(
            BiradsCategory::Birads4C,
            "Linear/branching calcifications, high suspicion.",
            BIOPSY_RECOMMENDED,
            refs::LINEAR_BRANCHING,
        )
        .with_image("birads4c_calc_linear_branching"),
    };
    ControlFlow::Continue(acc.write(RuleId::Calcification, verdict))
}

fn asymmetry(acc: Accumulator, obs: &Observation) -> Step {
    let Some(asym_type) = obs.asymmetry() else {
        return ControlFlow::Continue(acc);
    };
    if obs.has(FindingType::Mass) || obs.has(FindingType::Calcification) {
        return ControlFlow::Continue(
            acc.annotate(RuleId::Asymmetry, CO_OCCURRING_ASYMMETRY_NOTE),
        );
    }
    let verdict = match asym_type {
        AsymmetryType::SingleProjection => Verdict::new(
            BiradsCategory::Birads0,
            "Asymmetry seen on a single projection; additional imaging needed.",
            ADDITIONAL_PROJECTIONS,
            refs::ASYMMETRY_SINGLE_PROJECTION,
        ),
        AsymmetryType::Focal => Verdict::new(
            BiradsCategory::Birads3,
            "Focal asymmetry, probably benign.",
            SHORT_INTERVAL_FOLLOW_UP,
            refs::ASYMMETRY_FOCAL,
        )
        .with_image("birads3_asymmetry_focal"),
        AsymmetryType::Developing => Verdict::new(
            BiradsCategory::Birads4A,
            "Developing asymmetry, low suspicion.",
            BIOPSY_RECOMMENDED,
            refs::ASYMMETRY_DEVELOPING,
        )
        .with_image("birads4a_asymmetry_developing"),
        AsymmetryType::Global => Verdict::new(
            BiradsCategory::Birads2,
            "Global asymmetry, usually benign.",
            ROUTINE_SCREENING,
            refs::ASYMMETRY_GLOBAL,
        )
        .with_image("birads2_asymmetry_global"),
        AsymmetryType::DensityOnly => Verdict::new(
            BiradsCategory::Birads2,
            "Density difference only, usually benign.",
            ROUTINE_SCREENING,
            refs::ASYMMETRY_DENSITY_ONLY,
        ),
    };
    ControlFlow::Continue(acc.write(RuleId::Asymmetry, verdict))
}

fn architectural_distortion(acc: Accumulator, obs: &Observation) -> Step {
    if !obs.has(FindingType::ArchitecturalDistortion) {
        return ControlFlow::Continue(acc);
    }
    let verdict = if obs.prior_surgery() {
        Verdict::new(
            BiradsCategory::Birads2,
            "Architectural distortion with prior surgery, benign post-operative change.",
            ROUTINE_SCREENING,
            refs::DISTORTION_POST_OPERATIVE,
        )
        .with_image("birads2_postop_ad")
    } else {
        match acc.category() {
            Some(BiradsCategory::Birads4B | BiradsCategory::Birads4C) => Verdict::new(
                BiradsCategory::Birads5,
                "Architectural distortion plus suspicious finding, typically malignant.",
                BIOPSY_OR_SURGERY,
                refs::DISTORTION_WITH_SUSPICIOUS_FINDING,
            )
            .with_image("birads5_ad_combined"),
            None => Verdict::new(
                BiradsCategory::Birads4C,
                "Isolated architectural distortion, high suspicion.",
                BIOPSY_RECOMMENDED,
                refs::DISTORTION_ISOLATED,
            )
            .with_image("birads4c_ad_isolated"),
            // Any other existing category stands, the distortion is not
            // reflected in the result.
            Some(current) => {
                debug!(
                    "{}: distortion left {current} unchanged",
                    RuleId::ArchitecturalDistortion
                );
                return ControlFlow::Continue(acc);
            }
        }
    };
    ControlFlow::Continue(acc.write(RuleId::ArchitecturalDistortion, verdict))
}

fn retraction(acc: Accumulator, obs: &Observation) -> Step {
    if !(obs.has_retraction() && obs.exam_complete()) {
        return ControlFlow::Continue(acc);
    }
    ControlFlow::Continue(acc.write(
        RuleId::Retraction,
        Verdict::new(
            BiradsCategory::Birads5,
            "Skin/nipple retraction: classic malignancy pattern.",
            BIOPSY_OR_SURGERY,
            refs::RETRACTION,
        )
        .with_image("birads5_skin_nipple_retraction"),
    ))
}
