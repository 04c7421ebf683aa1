//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level is taken from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown, with the registry size
//! - **State changes** (`info`): Created, Deleted, Active flag set, Import finished
//! - **Reads and ignored requests** (`debug`): Get, Statistics, logins on missing or inactive users
//! - **Suspicious input** (`warn`): Rejected creates, users stored with a malformed email
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Every lookup and skipped import row
//! RUST_LOG=debug cargo run -- users.csv
//!
//! # Only this crate
//! RUST_LOG=user_registry=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an import looks like:
//!
//! ```text
//! INFO Actor started size=0
//! INFO Created id="u1" size=1
//! INFO Created id="u2" size=2
//! INFO Import finished created=2 size=2
//! ```

/// Initializes structured logging for the application.
///
/// Call once, before starting the [`RegistrySystem`](crate::lifecycle::RegistrySystem).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
