use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use birads_engine::ClassificationResult;
use birads_findings::{AsymmetryType, Distribution, FindingType, Margin, Morphology, Shape};

pub const DEFAULT_IMAGE_ROOT: &str = "images";
pub const IMAGE_EXTENSION: &str = "jpg";

/// Location of the example image for `key` under `root`.
pub fn image_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{key}.{IMAGE_EXTENSION}"))
}

/// Plain-text result card.
pub fn render_text(result: &ClassificationResult, image_root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.category);
    let _ = writeln!(out, "{}", result.explanation);
    let _ = writeln!(out, "Management: {}", result.management);
    if let Some(note) = &result.extra_note {
        let _ = writeln!(out, "Note: {note}");
    }
    if let Some(key) = &result.image_key {
        let _ = writeln!(
            out,
            "Example image: {}",
            image_path(image_root, key).display()
        );
    }
    if !result.reference_detail.is_empty() {
        let _ = writeln!(out, "\nReference:\n{}", result.reference_detail);
    }
    out
}

fn join_labels<T: Copy>(items: &[T], label: impl Fn(T) -> &'static str) -> String {
    items
        .iter()
        .map(|&item| label(item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The data-entry vocabulary, with the margins and distributions a form
/// offers for each shape and morphology.
pub fn render_options() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Finding types: {}",
        join_labels(&FindingType::ALL, FindingType::label)
    );

    let _ = writeln!(out, "\nMass shapes:");
    for shape in Shape::ALL {
        let _ = writeln!(
            out,
            "  {shape}: margins {}",
            join_labels(shape.offered_margins(), Margin::label)
        );
    }

    let _ = writeln!(out, "\nCalcification morphologies:");
    for morphology in Morphology::ALL {
        let offered = morphology.offered_distributions();
        if offered.is_empty() {
            let _ = writeln!(out, "  {morphology}: typically benign, no distribution");
        } else {
            let _ = writeln!(
                out,
                "  {morphology}: distributions {}",
                join_labels(offered, Distribution::label)
            );
        }
    }

    let _ = writeln!(
        out,
        "\nAsymmetry types: {}",
        join_labels(&AsymmetryType::ALL, AsymmetryType::label)
    );
    out
}
