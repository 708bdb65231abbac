//! Resolver implementations

mod descriptor;

pub use descriptor::DescriptorResolver;
