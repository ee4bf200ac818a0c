//! Core of the GraphQL Inspector check-run action.
//!
//! This crate holds everything that does not need a network connection:
//! - [`chunk()`] splits annotations into API-sized batches
//! - [`coerce()`] turns string action inputs into booleans
//! - [`resolve_conclusion()`] applies the breaking-change override
//! - [`CheckRunReporter`] finalizes a check run and delivers annotations
//! - [`run()`] orchestrates a whole inspection against injected collaborators
//!
//! Platform implementations of [`CheckRunClient`] and [`SchemaLoader`] live in
//! the inspector-github crate; the diff engine lives in inspector-diff.

pub mod annotation;
pub mod change;
pub mod check;
pub mod chunk;
pub mod conclusion;
pub mod diff;
pub mod error;
pub mod flags;
pub mod report;
pub mod run;
pub mod source;
pub mod summary;

pub use annotation::{Annotation, AnnotationLevel};
pub use change::{Change, Criticality};
pub use check::{CheckOutput, CheckRunClient, CheckRunId, CheckRunUpdate, CheckStatus};
pub use chunk::chunk;
pub use conclusion::{Conclusion, resolve_conclusion};
pub use diff::{SchemaDiff, SchemaDiffer};
pub use error::{Error, Result};
pub use flags::{FlagValue, coerce};
pub use report::{CheckRunReporter, MAX_ANNOTATIONS_PER_UPDATE, ReportOutcome};
pub use run::{
    ActionOutput, Collaborators, DEFAULT_APPROVE_LABEL, DEFAULT_CHECK_NAME, PullRequest,
    RunConfig, RunOutcome, SourcePlan, plan_sources, run,
};
pub use source::{SchemaLoader, SchemaLocation, SchemaPointer, SchemaSource};
pub use summary::{SUMMARY_CHANGE_LIMIT, create_summary};
