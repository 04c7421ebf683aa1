use tracing::{error, info};

use crate::framework::{FrameworkError, RegistryActor, RegistryClient, DEFAULT_BUFFER_SIZE};

/// Owns the running registry actor.
///
/// `RegistrySystem` is responsible for:
/// - **Startup**: Spawning the [`RegistryActor`] on the current Tokio runtime
/// - **Access**: Exposing a [`RegistryClient`] that can be cloned into other tasks
/// - **Shutdown**: Closing the channel and waiting for the actor to finish
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new();
///
/// system.users.create("u1", "Alice", "alice@example.com").await?;
/// system.users.record_login("u1").await?;
/// let stats = system.users.statistics().await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the registry actor
    pub users: RegistryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    /// Spawns an actor over an empty registry.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (actor, users) = RegistryActor::new(DEFAULT_BUFFER_SIZE);
        let handle = tokio::spawn(actor.run());
        Self { users, handle }
    }

    /// Gracefully shuts down the registry.
    ///
    /// Dropping this system's client closes the channel once every clone of it
    /// is gone too; the actor then drains its queue and exits.
    ///
    /// # Errors
    /// [`FrameworkError::ShutdownFailed`] if the actor task panicked or was cancelled.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down registry...");
        drop(self.users);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(FrameworkError::ShutdownFailed(e.to_string()));
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}
