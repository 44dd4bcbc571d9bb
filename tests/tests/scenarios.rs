use birads_engine::rules::{
    ADDITIONAL_IMAGING, ADDITIONAL_PROJECTIONS, BIOPSY_OR_SURGERY, BIOPSY_RECOMMENDED,
    ROUTINE_SCREENING, SHORT_INTERVAL_FOLLOW_UP, TREATMENT_PLANNING,
};
use birads_engine::{classify, classify_traced, BiradsCategory, RuleId, CO_OCCURRING_ASYMMETRY_NOTE};
use birads_findings::{AsymmetryType, Distribution, Margin, Morphology, ObservationDraft, Shape};
use pretty_assertions::assert_eq;
use tests::{category_of, observe};

use BiradsCategory::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scenario_table() {
    init();
    let cases = [
        ("negative exam", ObservationDraft::complete(), Birads1),
        (
            "oval circumscribed mass",
            ObservationDraft::complete().with_mass(Shape::Oval, Margin::Circumscribed),
            Birads2,
        ),
        (
            "linear/branching calcifications",
            ObservationDraft::complete().with_calcification(Morphology::LinearBranching, None),
            Birads4C,
        ),
        (
            "single projection asymmetry",
            ObservationDraft::complete().with_asymmetry(AsymmetryType::SingleProjection),
            Birads0,
        ),
        (
            "post-operative distortion",
            ObservationDraft::complete()
                .with_architectural_distortion()
                .with_prior_surgery(),
            Birads2,
        ),
        (
            "retraction without findings",
            ObservationDraft::complete().with_skin_retraction(),
            Birads5,
        ),
    ];
    for (name, draft, expected) in cases {
        assert_eq!(category_of(draft), expected, "{name}");
    }
}

#[test]
fn incomplete_exam_returns_birads0_regardless_of_findings() {
    init();
    let result = classify(&observe(
        ObservationDraft::default()
            .with_calcification(Morphology::Pleomorphic, Some(Distribution::Linear))
            .with_biopsy_proven_malignancy()
            .with_nipple_retraction(),
    ));
    assert_eq!(result.category, Birads0);
    assert_eq!(result.management, ADDITIONAL_IMAGING);
    assert_eq!(result.reference_detail, "");
    assert_eq!(result.image_key, None);
}

#[test]
fn biopsy_proven_malignancy_is_birads6() {
    init();
    let assessment = classify_traced(&observe(
        ObservationDraft::complete()
            .with_mass(Shape::Round, Margin::Circumscribed)
            .with_skin_retraction()
            .with_biopsy_proven_malignancy(),
    ));
    assert_eq!(assessment.result.category, Birads6);
    assert_eq!(assessment.result.management, TREATMENT_PLANNING);
    assert_eq!(assessment.result.explanation, "Biopsy-proven malignancy.");
    assert_eq!(assessment.deciding_rule(), Some(RuleId::BiopsyProven));
    assert_eq!(assessment.trace.len(), 1);
}

#[test]
fn mass_category_follows_margin_not_shape() {
    init();
    let cases = [
        (Shape::Round, Margin::Circumscribed, Birads2, ROUTINE_SCREENING),
        (Shape::Oval, Margin::Microlobulated, Birads4A, BIOPSY_RECOMMENDED),
        (Shape::Irregular, Margin::Microlobulated, Birads4A, BIOPSY_RECOMMENDED),
        (Shape::Irregular, Margin::Irregular, Birads4B, BIOPSY_RECOMMENDED),
        (Shape::Round, Margin::Spiculated, Birads4C, BIOPSY_RECOMMENDED),
    ];
    for (shape, margin, category, management) in cases {
        let result = classify(&observe(ObservationDraft::complete().with_mass(shape, margin)));
        assert_eq!(
            (result.category, result.management.as_str()),
            (category, management),
            "{shape} {margin}"
        );
    }
}

#[test]
fn calcification_table() {
    init();
    use Distribution::*;
    use Morphology::*;
    let cases = [
        (RoundPunctate, Some(Diffuse), Birads2, "birads2_calc_punctate_diffuse"),
        (RoundPunctate, Some(Grouped), Birads3, "birads3_calc_punctate_grouped"),
        (RoundPunctate, Some(Segmental), Birads3, "birads3_calc_punctate_grouped"),
        (RoundPunctate, None, Birads3, "birads3_calc_punctate_grouped"),
        (Amorphous, Some(Grouped), Birads4A, "birads4a_calc_amorphous"),
        (Amorphous, Some(Diffuse), Birads4A, "birads4a_calc_amorphous"),
        (Amorphous, None, Birads4A, "birads4a_calc_amorphous"),
        (Amorphous, Some(Segmental), Birads4B, "birads4b_calc_amorphous_segmental"),
        (Amorphous, Some(Linear), Birads4B, "birads4b_calc_amorphous_segmental"),
        (Pleomorphic, Some(Grouped), Birads4B, "birads4b_calc_pleomorphic"),
        (Pleomorphic, Some(Linear), Birads4C, "birads4c_calc_pleomorphic_segmental"),
        (Pleomorphic, Some(Segmental), Birads4C, "birads4c_calc_pleomorphic_segmental"),
        (LinearBranching, Some(Grouped), Birads4C, "birads4c_calc_linear_branching"),
        (LinearBranching, Some(Segmental), Birads4C, "birads4c_calc_linear_branching"),
    ];
    for (morphology, distribution, category, image) in cases {
        let result = classify(&observe(
            ObservationDraft::complete().with_calcification(morphology, distribution),
        ));
        assert_eq!(
            (result.category, result.image_key.as_deref()),
            (category, Some(image)),
            "{morphology} {distribution:?}"
        );
    }
}

#[test]
fn round_punctate_grouped_gets_short_interval_follow_up() {
    let result = classify(&observe(
        ObservationDraft::complete()
            .with_calcification(Morphology::RoundPunctate, Some(Distribution::Grouped)),
    ));
    assert_eq!(result.management, SHORT_INTERVAL_FOLLOW_UP);
}

#[test]
fn benign_morphologies_are_birads2_with_labelled_text() {
    init();
    for morphology in Morphology::BENIGN {
        let result = classify(&observe(
            ObservationDraft::complete().with_calcification(morphology, None),
        ));
        assert_eq!(result.category, Birads2, "{morphology}");
        assert_eq!(
            result.explanation,
            format!("{} calcifications, typically benign.", morphology.label())
        );
        assert!(result.reference_detail.starts_with(morphology.label()));
        assert_eq!(
            result.image_key,
            Some(format!("birads2_calc_{}", morphology.slug()))
        );
    }
}

#[test]
fn milk_of_calcium_image_key_has_no_spaces() {
    let result = classify(&observe(
        ObservationDraft::complete().with_calcification(Morphology::MilkOfCalcium, None),
    ));
    assert_eq!(result.image_key.as_deref(), Some("birads2_calc_milk_of_calcium"));
}

#[test]
fn isolated_asymmetry_table() {
    init();
    let cases = [
        (AsymmetryType::SingleProjection, Birads0, ADDITIONAL_PROJECTIONS, false),
        (AsymmetryType::Focal, Birads3, SHORT_INTERVAL_FOLLOW_UP, true),
        (AsymmetryType::Developing, Birads4A, BIOPSY_RECOMMENDED, true),
        (AsymmetryType::Global, Birads2, ROUTINE_SCREENING, true),
        (AsymmetryType::DensityOnly, Birads2, ROUTINE_SCREENING, false),
    ];
    for (asym_type, category, management, has_image) in cases {
        let result = classify(&observe(ObservationDraft::complete().with_asymmetry(asym_type)));
        assert_eq!(result.category, category, "{asym_type}");
        assert_eq!(result.management, management, "{asym_type}");
        assert_eq!(result.image_key.is_some(), has_image, "{asym_type}");
        assert_eq!(result.extra_note, None);
    }
}

#[test]
fn calcification_overrides_mass() {
    init();
    let assessment = classify_traced(&observe(
        ObservationDraft::complete()
            .with_mass(Shape::Irregular, Margin::Spiculated)
            .with_calcification(Morphology::CoarsePopcorn, None),
    ));
    assert_eq!(assessment.result.category, Birads2);
    assert_eq!(assessment.deciding_rule(), Some(RuleId::Calcification));
    let rules: Vec<RuleId> = assessment.trace.iter().map(|f| f.rule).collect();
    assert_eq!(rules, vec![RuleId::Mass, RuleId::Calcification]);
}

#[test]
fn asymmetry_is_subordinate_to_mass() {
    init();
    assert_eq!(
        category_of(ObservationDraft::complete().with_asymmetry(AsymmetryType::Focal)),
        Birads3
    );

    let assessment = classify_traced(&observe(
        ObservationDraft::complete()
            .with_asymmetry(AsymmetryType::Focal)
            .with_mass(Shape::Oval, Margin::Circumscribed),
    ));
    assert_eq!(assessment.result.category, Birads2);
    assert_eq!(
        assessment.result.extra_note.as_deref(),
        Some(CO_OCCURRING_ASYMMETRY_NOTE)
    );
    assert_eq!(
        assessment.result.image_key.as_deref(),
        Some("birads2_mass_circumscribed")
    );
    assert_eq!(assessment.deciding_rule(), Some(RuleId::Mass));
}

#[test]
fn note_survives_later_overrides() {
    let result = classify(&observe(
        ObservationDraft::complete()
            .with_calcification(Morphology::Amorphous, None)
            .with_asymmetry(AsymmetryType::Global)
            .with_skin_retraction(),
    ));
    assert_eq!(result.category, Birads5);
    assert_eq!(result.extra_note.as_deref(), Some(CO_OCCURRING_ASYMMETRY_NOTE));
}

#[test]
fn distortion_upgrades_suspicious_mass() {
    init();
    let result = classify(&observe(
        ObservationDraft::complete()
            .with_mass(Shape::Irregular, Margin::Irregular)
            .with_architectural_distortion(),
    ));
    assert_eq!(result.category, Birads5);
    assert_eq!(result.management, BIOPSY_OR_SURGERY);
    assert_eq!(result.image_key.as_deref(), Some("birads5_ad_combined"));
}

#[test]
fn isolated_distortion_is_birads4c() {
    let result = classify(&observe(
        ObservationDraft::complete().with_architectural_distortion(),
    ));
    assert_eq!(result.category, Birads4C);
    assert_eq!(result.image_key.as_deref(), Some("birads4c_ad_isolated"));
}

#[test]
fn prior_surgery_forces_distortion_to_birads2() {
    let result = classify(&observe(
        ObservationDraft::complete()
            .with_calcification(Morphology::LinearBranching, Some(Distribution::Linear))
            .with_architectural_distortion()
            .with_prior_surgery(),
    ));
    assert_eq!(result.category, Birads2);
    assert_eq!(result.image_key.as_deref(), Some("birads2_postop_ad"));
}

#[test]
fn prior_surgery_without_distortion_has_no_effect() {
    assert_eq!(
        category_of(
            ObservationDraft::complete()
                .with_mass(Shape::Irregular, Margin::Spiculated)
                .with_prior_surgery()
        ),
        Birads4C
    );
}

#[test]
fn distortion_leaves_low_suspicion_categories_alone() {
    init();
    let cases = [
        (
            ObservationDraft::complete().with_mass(Shape::Oval, Margin::Circumscribed),
            Birads2,
        ),
        (
            ObservationDraft::complete()
                .with_calcification(Morphology::RoundPunctate, Some(Distribution::Grouped)),
            Birads3,
        ),
        (
            ObservationDraft::complete().with_asymmetry(AsymmetryType::Developing),
            Birads4A,
        ),
        (
            ObservationDraft::complete().with_asymmetry(AsymmetryType::SingleProjection),
            Birads0,
        ),
    ];
    for (draft, expected) in cases {
        let with_distortion = classify(&observe(draft.clone().with_architectural_distortion()));
        assert_eq!(with_distortion.category, expected);
        assert_eq!(with_distortion, classify(&observe(draft)));
    }
}

#[test]
fn retraction_overrides_every_finding_category() {
    init();
    let drafts = [
        ObservationDraft::complete().with_mass(Shape::Round, Margin::Circumscribed),
        ObservationDraft::complete()
            .with_calcification(Morphology::RoundPunctate, Some(Distribution::Grouped)),
        ObservationDraft::complete().with_asymmetry(AsymmetryType::Developing),
        ObservationDraft::complete().with_mass(Shape::Irregular, Margin::Irregular),
        ObservationDraft::complete().with_calcification(Morphology::LinearBranching, None),
    ];
    for draft in drafts {
        let assessment = classify_traced(&observe(draft.with_nipple_retraction()));
        assert_eq!(assessment.result.category, Birads5);
        assert_eq!(assessment.deciding_rule(), Some(RuleId::Retraction));
        assert_eq!(
            assessment.result.image_key.as_deref(),
            Some("birads5_skin_nipple_retraction")
        );
    }
}
