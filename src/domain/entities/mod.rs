//! Domain Entities
//!
//! - `Artifact` - coordinate + version + integrity
//! - `LockableEntity` - dependency, plugin, extension, parent or bare artifact
//! - `EntitySet` - coordinate-unique sorted collection
//! - `ProfiledSet` - default set plus per-profile sets
//! - `Project` - everything one lock records

mod artifact;
mod entity_set;
mod lockable;
mod profile;
mod profiled;
mod project;

pub use artifact::Artifact;
pub use entity_set::EntitySet;
pub use lockable::{EntityKind, LockableEntity};
pub use profile::{ensure_unique_ids, Activation, ActivationOs, Profile};
pub use profiled::ProfiledSet;
pub use project::{BuildEntities, Project};
