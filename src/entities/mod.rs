//! Entity type definitions
//!
//! Records persisted by the store:
//! - [`Project`] - research projects with stage progress and report fields
//! - [`Citation`] - bibliography entries, optionally linked to a project
//! - [`Profile`] - the researcher's profile document
//! - [`Settings`] - workspace preference document

pub mod citation;
pub mod profile;
pub mod project;
pub mod settings;

pub use citation::Citation;
pub use profile::Profile;
pub use project::Project;
pub use settings::Settings;

use thiserror::Error;

/// Construction-time validation failures for entity records
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("progress must be a fraction in [0, 1], got {0}")]
    ProgressOutOfRange(f64),

    #[error("unknown stage: '{0}'. Use one of: problem-formulation, literature-review, research-design, data-collection, analysis, reporting")]
    UnknownStage(String),
}
