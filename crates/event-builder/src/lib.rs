//! Event-builder for the uibridge reporting bridge.
//!
//! Turns one executed batch of remote UI actions into a reportable event:
//! resolves the book/scope identity, validates attached message identifiers
//! against it, and renders the text/table body consumed by the reporting
//! backend.

pub mod api;
pub mod config;
pub mod errors;
pub mod identity;
pub mod model;
pub mod payload;

pub use api::{DefaultEventBuilder, EventBuilder};
pub use config::ReporterCfg;
pub use errors::{BuildError, BuildResult};
pub use model::{ActionBatch, AdditionalInfo, Event, EventStatus, ExecutionResult};
pub use payload::{ContentBlock, TableRow};
