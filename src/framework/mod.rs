//! Actor front end for the registry.
//!
//! This module lets one [`UserService`](crate::service::UserService) be shared
//! by concurrent callers without a lock around the whole map.
//!
//! # Main Components
//!
//! - [`RegistryActor`] - Owns the registry and processes requests sequentially
//! - [`RegistryClient`] - Cloneable async client, one method per registry operation
//! - [`FrameworkError`] - Channel errors plus pass-through [`UserError`](crate::service::UserError)

pub mod core;

// Re-export core types for convenience
pub use core::*;
