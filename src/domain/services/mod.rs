//! Domain Services
//!
//! Pure logic over the entity model. The only side effects are `tracing`
//! events; resolution goes through the `Resolver` port.

mod activation;
mod diff;
mod emulation;
mod extraction;
mod filters;
mod marking;
mod partition;
mod resolution;

pub use activation::OsProfileActivator;
pub use diff::{compare_project, compare_with, DiffReport, ProjectDiff};
pub use emulation::emulate_os_properties;
pub use extraction::{extract_ignored, Extraction};
pub use filters::{FilterRule, Filters};
pub use marking::{mark_entity, mark_ignored, mark_set};
pub use partition::{split, Partitioner};
pub use resolution::resolve_dependencies;
