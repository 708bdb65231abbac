//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod lock_policy;
pub mod lock_repository;
pub mod profile_activator;
pub mod resolver;

pub use lock_policy::{LockPolicy, StrictPolicy};
pub use lock_repository::LockRepository;
pub use profile_activator::ProfileActivator;
pub use resolver::{DependencyGraph, GraphNode, ProjectSource, Resolver};
