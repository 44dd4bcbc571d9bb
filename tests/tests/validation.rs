use birads_findings::{
    AsymmetryType, Distribution, FindingType, Margin, Morphology, Observation, ObservationDraft,
    Shape, ValidationError,
};
use pretty_assertions::assert_eq;

#[test]
fn json_draft_round_trips_into_an_observation() {
    let draft: ObservationDraft = serde_json::from_str(
        r#"{
            "exam_complete": true,
            "finding_types": ["Calcification", "Asymmetry"],
            "morphology": "LinearBranching",
            "distribution": "Grouped",
            "asym_type": "DensityOnly",
            "nipple_retraction": true
        }"#,
    )
    .unwrap();
    assert_eq!(
        draft,
        ObservationDraft::complete()
            .with_calcification(Morphology::LinearBranching, Some(Distribution::Grouped))
            .with_asymmetry(AsymmetryType::DensityOnly)
            .with_nipple_retraction()
    );

    let obs = Observation::try_from(draft).unwrap();
    assert!(obs.has(FindingType::Calcification));
    assert_eq!(obs.asymmetry(), Some(AsymmetryType::DensityOnly));
    assert!(obs.has_retraction());
}

#[test]
fn rejected_drafts_never_reach_the_engine() {
    let cases = [
        (
            ObservationDraft {
                shape: Some(Shape::Round),
                ..ObservationDraft::complete()
            },
            ValidationError::SubFieldWithoutFinding {
                field: "shape",
                finding: FindingType::Mass,
            },
        ),
        (
            ObservationDraft::complete().with_calcification(Morphology::Vascular, Some(Distribution::Linear)),
            ValidationError::DistributionForBenignMorphology {
                morphology: Morphology::Vascular,
            },
        ),
        (
            ObservationDraft::complete().with_mass(Shape::Irregular, Margin::Circumscribed),
            ValidationError::CircumscribedIrregularMass,
        ),
    ];
    for (draft, expected) in cases {
        assert_eq!(draft.validate().unwrap_err(), expected);
    }
}

#[test]
fn validation_messages_name_the_field() {
    let mut draft = ObservationDraft::complete();
    draft.finding_types.insert(FindingType::Asymmetry);
    let err = draft.validate().unwrap_err();
    assert_eq!(err.to_string(), "Asymmetry finding requires 'asym_type'");
}

#[test]
fn assess_through_the_facade() {
    let assessment = birads::assess(
        ObservationDraft::complete().with_calcification(Morphology::EggshellRim, None),
    )
    .unwrap();
    assert_eq!(assessment.result.category, birads::BiradsCategory::Birads2);
    assert_eq!(
        assessment.result.image_key.as_deref(),
        Some("birads2_calc_eggshell_rim")
    );

    let err = birads::assess(ObservationDraft {
        asym_type: Some(AsymmetryType::Global),
        ..ObservationDraft::default()
    })
    .unwrap_err();
    assert!(matches!(err, ValidationError::SubFieldWithoutFinding { .. }));
}
