//! BI-RADS mammography decision support.
//!
//! Thin facade over [`birads_findings`] and [`birads_engine`]: decode an
//! observation document, validate it, classify it, and render the result as
//! a text card or a JSON [`Report`]. The `birads` binary is built on top of
//! these functions.

pub mod render;
pub mod report;

pub use birads_engine::{
    classify, classify_traced, Assessment, BiradsCategory, ClassificationResult, RuleFiring, RuleId,
};
pub use birads_findings::{Observation, ObservationDraft, ValidationError};
pub use render::{image_path, render_options, render_text, DEFAULT_IMAGE_ROOT, IMAGE_EXTENSION};
pub use report::{assess, assess_json, parse_draft, AssessError, Report};
