//! # User Registry
//!
//! > **An in-memory user registry with validated entities.**
//!
//! The crate keeps a keyed collection of [`User`](model::User)s, enforces
//! their field rules and answers the usual questions about them: who is
//! active, who logs in often, which users share an email domain, and how the
//! whole registry looks in aggregate.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Entity ([`model`])
//! - **Role**: The [`User`](model::User) record validates its own `name` and
//!   `email` on every assignment. Construction itself is unchecked.
//! - **Key items**: [`User`](model::User), [`SharedUser`](model::SharedUser),
//!   [`UserStatistics`](model::UserStatistics).
//!
//! ### 2. The Registry ([`service`])
//! - **Role**: CRUD, queries, login recording, statistics and CSV batch import
//!   over a `HashMap` of shared handles.
//! - **Key items**: [`UserService`](service::UserService), [`UserError`](service::UserError).
//!
//! ### 3. The Actor ([`framework`])
//! - **Role**: Moves a registry into its own Tokio task so many callers can
//!   use it at once.
//! - **Key items**: [`RegistryActor`](framework::RegistryActor),
//!   [`RegistryClient`](framework::RegistryClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns the actor, sets up tracing, shuts down cleanly.
//! - **Key items**: [`RegistrySystem`](lifecycle::RegistrySystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Shared entities
//! The registry stores each user behind a [`SharedUser`](model::SharedUser)
//! (`Arc<Mutex<User>>`) and returns clones of that handle. A change made
//! through a returned handle is a change to the stored user.
//!
//! ### Errors
//! Only two things are errors: malformed input
//! ([`UserError::InvalidArgument`](service::UserError::InvalidArgument)) and a
//! duplicate id ([`UserError::ConflictingState`](service::UserError::ConflictingState)).
//! Missing ids yield `None` or `false`.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use user_registry::service::UserService;
//!
//! let mut users = UserService::new();
//! users.create("u1", "Alice", "alice@example.com").unwrap();
//! users.record_login("u1");
//!
//! let stats = users.statistics();
//! assert_eq!(stats.total_logins, 1);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- users.csv
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod text;
