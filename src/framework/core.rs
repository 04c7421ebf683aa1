//! # Registry Actor
//!
//! This module puts a [`UserService`] behind a Tokio task so it can be shared
//! between concurrent callers.
//!
//! ## Key Types
//!
//! - [`RegistryRequest`]: One message variant per registry operation.
//! - [`RegistryActor`]: Owns the registry and processes requests in order.
//! - [`RegistryClient`]: Cloneable async handle that sends requests.
//! - [`FrameworkError`]: Channel failures plus pass-through domain errors.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::model::{SharedUser, UserStatistics};
use crate::service::{UserError, UserService};

/// Channel capacity used by [`RegistrySystem`](crate::lifecycle::RegistrySystem).
pub const DEFAULT_BUFFER_SIZE: usize = 32;

// =============================================================================
// 1. ERRORS & MESSAGES
// =============================================================================

/// Errors that can occur when talking to the registry actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor task failed: {0}")]
    ShutdownFailed(String),
    #[error(transparent)]
    User(#[from] UserError),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Message sent to the actor. Each variant maps to one [`UserService`] operation.
#[derive(Debug)]
pub enum RegistryRequest {
    Create {
        id: String,
        name: String,
        email: String,
        respond_to: Response<Result<SharedUser, UserError>>,
    },
    FindById {
        id: String,
        respond_to: Response<Option<SharedUser>>,
    },
    All {
        respond_to: Response<Vec<SharedUser>>,
    },
    Active {
        respond_to: Response<Vec<SharedUser>>,
    },
    Frequent {
        respond_to: Response<Vec<SharedUser>>,
    },
    Delete {
        id: String,
        respond_to: Response<bool>,
    },
    SetActive {
        id: String,
        active: bool,
        respond_to: Response<bool>,
    },
    RecordLogin {
        id: String,
        respond_to: Response<()>,
    },
    TotalCount {
        respond_to: Response<usize>,
    },
    ActiveCount {
        respond_to: Response<usize>,
    },
    Statistics {
        respond_to: Response<UserStatistics>,
    },
    FindByEmailDomain {
        domain: String,
        respond_to: Response<Vec<SharedUser>>,
    },
    ImportCsv {
        data: String,
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 2. THE ACTOR
// =============================================================================

/// Owns a [`UserService`] and the receiving end of its request channel.
///
/// Requests are handled one at a time, so the registry map needs no lock.
/// Users themselves sit behind [`SharedUser`] handles, which carry their own
/// lock because callers may keep and mutate them after the reply.
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    service: UserService,
}

impl RegistryActor {
    /// Creates an actor over an empty registry and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        Self::with_service(UserService::new(), buffer_size)
    }

    /// Creates an actor that takes over an existing registry.
    pub fn with_service(service: UserService, buffer_size: usize) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, RegistryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.service.total_count(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.service.total_count(), "Shutdown");
    }

    // A send error only means the caller stopped waiting; nothing to do.
    fn handle(&mut self, msg: RegistryRequest) {
        let service = &mut self.service;
        match msg {
            RegistryRequest::Create {
                id,
                name,
                email,
                respond_to,
            } => {
                let _ = respond_to.send(service.create(id, name, email));
            }
            RegistryRequest::FindById { id, respond_to } => {
                let _ = respond_to.send(service.find_by_id(&id));
            }
            RegistryRequest::All { respond_to } => {
                let _ = respond_to.send(service.all());
            }
            RegistryRequest::Active { respond_to } => {
                let _ = respond_to.send(service.active());
            }
            RegistryRequest::Frequent { respond_to } => {
                let _ = respond_to.send(service.frequent());
            }
            RegistryRequest::Delete { id, respond_to } => {
                let _ = respond_to.send(service.delete(&id));
            }
            RegistryRequest::SetActive {
                id,
                active,
                respond_to,
            } => {
                let found = if active {
                    service.activate(&id)
                } else {
                    service.deactivate(&id)
                };
                let _ = respond_to.send(found);
            }
            RegistryRequest::RecordLogin { id, respond_to } => {
                service.record_login(&id);
                let _ = respond_to.send(());
            }
            RegistryRequest::TotalCount { respond_to } => {
                let _ = respond_to.send(service.total_count());
            }
            RegistryRequest::ActiveCount { respond_to } => {
                let _ = respond_to.send(service.active_count());
            }
            RegistryRequest::Statistics { respond_to } => {
                let _ = respond_to.send(service.statistics());
            }
            RegistryRequest::FindByEmailDomain { domain, respond_to } => {
                let _ = respond_to.send(service.find_by_email_domain(&domain));
            }
            RegistryRequest::ImportCsv { data, respond_to } => {
                debug!(bytes = data.len(), "ImportCsv");
                let _ = respond_to.send(service.import_csv(&data));
            }
        }
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

/// A cloneable async handle to a running [`RegistryActor`].
///
/// Returned users are the registry's own [`SharedUser`] handles, so mutating
/// them is visible to later requests.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> RegistryRequest,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn create(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<SharedUser, FrameworkError> {
        let (id, name, email) = (id.into(), name.into(), email.into());
        let created = self
            .request(|respond_to| RegistryRequest::Create {
                id,
                name,
                email,
                respond_to,
            })
            .await?;
        Ok(created?)
    }

    pub async fn find_by_id(
        &self,
        id: impl Into<String>,
    ) -> Result<Option<SharedUser>, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RegistryRequest::FindById { id, respond_to })
            .await
    }

    pub async fn all(&self) -> Result<Vec<SharedUser>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::All { respond_to }).await
    }

    pub async fn active(&self) -> Result<Vec<SharedUser>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::Active { respond_to }).await
    }

    pub async fn frequent(&self) -> Result<Vec<SharedUser>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::Frequent { respond_to }).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<bool, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RegistryRequest::Delete { id, respond_to })
            .await
    }

    pub async fn activate(&self, id: impl Into<String>) -> Result<bool, FrameworkError> {
        self.set_active(id.into(), true).await
    }

    pub async fn deactivate(&self, id: impl Into<String>) -> Result<bool, FrameworkError> {
        self.set_active(id.into(), false).await
    }

    async fn set_active(&self, id: String, active: bool) -> Result<bool, FrameworkError> {
        self.request(|respond_to| RegistryRequest::SetActive {
            id,
            active,
            respond_to,
        })
        .await
    }

    pub async fn record_login(&self, id: impl Into<String>) -> Result<(), FrameworkError> {
        let id = id.into();
        self.request(|respond_to| RegistryRequest::RecordLogin { id, respond_to })
            .await
    }

    pub async fn total_count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| RegistryRequest::TotalCount { respond_to })
            .await
    }

    pub async fn active_count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| RegistryRequest::ActiveCount { respond_to })
            .await
    }

    pub async fn statistics(&self) -> Result<UserStatistics, FrameworkError> {
        self.request(|respond_to| RegistryRequest::Statistics { respond_to })
            .await
    }

    pub async fn find_by_email_domain(
        &self,
        domain: impl Into<String>,
    ) -> Result<Vec<SharedUser>, FrameworkError> {
        let domain = domain.into();
        self.request(|respond_to| RegistryRequest::FindByEmailDomain { domain, respond_to })
            .await
    }

    pub async fn import_csv(&self, data: impl Into<String>) -> Result<usize, FrameworkError> {
        let data = data.into();
        self.request(|respond_to| RegistryRequest::ImportCsv { data, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[tokio::test]
    async fn test_registry_actor_round_trip() {
        let (actor, client) = RegistryActor::new(8);
        let handle = tokio::spawn(actor.run());

        // 1. Create
        let alice = client.create("user_1", "Alice", "alice@example.com").await.unwrap();
        assert_eq!(client.total_count().await.unwrap(), 1);

        // 2. Duplicate create passes the domain error through
        let err = client.create("user_1", "Bob", "bob@example.com").await.unwrap_err();
        assert!(matches!(err, FrameworkError::User(UserError::ConflictingState(_))));

        // 3. Logins are gated on active
        client.record_login("user_1").await.unwrap();
        assert!(client.deactivate("user_1").await.unwrap());
        client.record_login("user_1").await.unwrap();
        assert_eq!(alice.with(User::login_count), 1);

        // 4. Delete
        assert!(client.delete("user_1").await.unwrap());
        assert!(!client.delete("user_1").await.unwrap());
        assert!(client.find_by_id("user_1").await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_with_service_keeps_existing_users() {
        let mut service = UserService::new();
        service.create("user_1", "Alice", "alice@example.com").unwrap();

        let (actor, client) = RegistryActor::with_service(service, 8);
        tokio::spawn(actor.run());

        assert!(client.find_by_id("user_1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = RegistryActor::new(8);
        drop(actor);

        let err = client.total_count().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_error() {
        // Stand-in actor that reads requests but never answers them.
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest>(8);
        tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                drop(request);
            }
        });
        let client = RegistryClient::new(sender);

        let err = client.total_count().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorDropped);
        let err = client.create("user_1", "Alice", "alice@example.com").await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorDropped);
    }
}
