//! BI-RADS classification engine.
//!
//! Maps a validated [`Observation`](birads_findings::Observation) to a
//! [`BiradsCategory`] with an explanation, a management recommendation, a
//! literature reference and an optional example-image key. Classification is
//! a fixed, ordered cascade of rules (see [`rules`]); rules that fire later
//! override earlier ones, and the two gates stop the cascade outright.
//!
//! ```
//! use birads_engine::{classify, BiradsCategory};
//! use birads_findings::{Margin, ObservationDraft, Shape};
//!
//! let obs = ObservationDraft::complete()
//!     .with_mass(Shape::Irregular, Margin::Irregular)
//!     .with_architectural_distortion()
//!     .validate()
//!     .unwrap();
//! assert_eq!(classify(&obs).category, BiradsCategory::Birads5);
//! ```

pub mod category;
pub mod engine;
pub mod references;
pub mod result;
pub mod rules;

pub use category::BiradsCategory;
pub use engine::{classify, classify_traced};
pub use result::{Assessment, ClassificationResult};
pub use rules::{RuleFiring, RuleId, CO_OCCURRING_ASYMMETRY_NOTE};
