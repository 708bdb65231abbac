//! Domain Layer
//!
//! The lock model and the algorithms over it, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Coordinates, patterns, integrity, policies, environments
//! - `entities/` - Artifacts, lockable entities, entity sets, profiles, projects
//! - `ports/` - Resolver, profile activator, lock policy and lock store contracts
//! - `services/` - Filters, extraction, diff, partitioning, marking
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Lock files and descriptors are read in `infrastructure`
//! 2. **Immutable values** - Transforms return new entities and sets
//! 3. **Ports & Adapters** - Resolution and activation go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
