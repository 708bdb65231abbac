//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LockUseCase` - Partition, mark and persist the lock
//! - `VerifyUseCase` - Compare the resolved project against the lock
//! - `ProfilesUseCase` - List profiles and their activation state

pub mod lock;
pub mod options;
pub mod profiles;
pub mod verify;

#[cfg(test)]
mod testing;

pub use lock::{LockResult, LockUseCase};
pub use options::RunOptions;
pub use profiles::{ProfileStatus, ProfilesUseCase};
pub use verify::{VerifyResult, VerifyUseCase};
