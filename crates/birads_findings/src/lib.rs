//! Finding model for BI-RADS mammography assessment.
//!
//! This crate defines the vocabulary of mammographic findings (masses,
//! calcifications, asymmetries, architectural distortion), the options a
//! data-entry form offers for each, and the validation step that turns an
//! [`ObservationDraft`] into an immutable [`Observation`] for the
//! classification engine.
//!
//! ```
//! use birads_findings::{Margin, ObservationDraft, Shape};
//!
//! let obs = ObservationDraft::complete()
//!     .with_mass(Shape::Oval, Margin::Circumscribed)
//!     .validate()
//!     .unwrap();
//! assert!(obs.mass().is_some());
//! ```

pub mod finding;
pub mod observation;
pub mod validate;

pub use finding::{AsymmetryType, Distribution, FindingType, Margin, Morphology, Shape};
pub use observation::{CalcificationFinding, MassFinding, Observation, ObservationDraft};
pub use validate::{validate, Result, ValidationError};
