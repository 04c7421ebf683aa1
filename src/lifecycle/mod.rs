//! Runtime orchestration and lifecycle management.
//!
//! - [`RegistrySystem`] - Starts the registry actor and shuts it down gracefully
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;
