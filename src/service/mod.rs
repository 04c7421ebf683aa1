//! The user registry: CRUD and query operations over a keyed collection of users.
//!
//! [`UserService`] is a plain synchronous value. Construct one per registry and
//! pass it where it is needed; for concurrent access wrap it in a
//! [`RegistryActor`](crate::framework::RegistryActor).

pub mod error;
mod import;

pub use error::*;

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::model::{SharedUser, User, UserStatistics};
use crate::text::{is_blank, is_valid_email};

/// In-memory registry of users keyed by id.
///
/// Every stored user lives behind a [`SharedUser`] handle. Operations that
/// return users hand out clones of those handles, so callers and the registry
/// observe the same state.
#[derive(Debug, Default)]
pub struct UserService {
    users: HashMap<String, SharedUser>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user and returns its shared handle.
    ///
    /// `name` and `email` are stored as given; only the id is checked.
    ///
    /// # Errors
    /// - [`UserError::InvalidArgument`] if `id` is blank
    /// - [`UserError::ConflictingState`] if `id` is already registered
    pub fn create(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<SharedUser, UserError> {
        let id = id.into();
        if is_blank(&id) {
            warn!("Create rejected: blank id");
            return Err(UserError::InvalidArgument(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.users.contains_key(&id) {
            warn!(%id, "Create rejected: already exists");
            return Err(UserError::ConflictingState(format!(
                "User with ID {id} already exists"
            )));
        }

        let user = User::new(id.clone(), name, email);
        if !is_valid_email(user.email()) {
            warn!(%id, email = user.email(), "Created user with malformed email");
        }
        let handle = SharedUser::new(user);
        self.users.insert(id.clone(), handle.clone());
        info!(%id, size = self.users.len(), "Created");
        Ok(handle)
    }

    pub fn find_by_id(&self, id: &str) -> Option<SharedUser> {
        let user = self.users.get(id).cloned();
        debug!(id, found = user.is_some(), "Get");
        user
    }

    /// Returns handles to every registered user, in no particular order.
    pub fn all(&self) -> Vec<SharedUser> {
        self.users.values().cloned().collect()
    }

    pub fn active(&self) -> Vec<SharedUser> {
        self.filter(User::is_active)
    }

    pub fn frequent(&self) -> Vec<SharedUser> {
        self.filter(User::is_frequent_user)
    }

    /// Removes the user with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.users.remove(id).is_some();
        if removed {
            info!(id, size = self.users.len(), "Deleted");
        } else {
            debug!(id, "Delete: not found");
        }
        removed
    }

    /// Marks the user active. Returns `false` if there is no such user.
    pub fn activate(&self, id: &str) -> bool {
        self.set_active(id, true)
    }

    /// Marks the user inactive. Returns `false` if there is no such user.
    pub fn deactivate(&self, id: &str) -> bool {
        self.set_active(id, false)
    }

    fn set_active(&self, id: &str, active: bool) -> bool {
        match self.users.get(id) {
            Some(user) => {
                user.with_mut(|u| u.set_active(active));
                info!(id, active, "Active flag set");
                true
            }
            None => {
                debug!(id, "Set active: not found");
                false
            }
        }
    }

    /// Counts a login for an existing, active user. Does nothing otherwise.
    pub fn record_login(&self, id: &str) {
        let Some(user) = self.users.get(id) else {
            debug!(id, "Login ignored: not found");
            return;
        };
        let recorded = user.with_mut(|u| {
            if u.is_active() {
                u.increment_login_count();
                Some(u.login_count())
            } else {
                None
            }
        });
        match recorded {
            Some(login_count) => debug!(id, login_count, "Login recorded"),
            None => debug!(id, "Login ignored: inactive"),
        }
    }

    pub fn total_count(&self) -> usize {
        self.users.len()
    }

    pub fn active_count(&self) -> usize {
        self.users.values().filter(|u| u.is_active()).count()
    }

    /// Builds a statistics snapshot in a single pass over the registry.
    pub fn statistics(&self) -> UserStatistics {
        let mut stats = UserStatistics {
            total_users: self.users.len(),
            ..UserStatistics::default()
        };
        for user in self.users.values() {
            user.with(|u| {
                if u.is_active() {
                    stats.active_users += 1;
                }
                if u.is_frequent_user() {
                    stats.frequent_users += 1;
                }
                stats.total_logins += u64::from(u.login_count());
            });
        }
        debug!(%stats, "Statistics");
        stats
    }

    /// Finds users whose email ends with `@domain`, ignoring case.
    ///
    /// A blank `domain` matches nothing.
    pub fn find_by_email_domain(&self, domain: &str) -> Vec<SharedUser> {
        if is_blank(domain) {
            return Vec::new();
        }
        let suffix = format!("@{}", domain.to_lowercase());
        self.filter(|u| u.email().to_lowercase().ends_with(&suffix))
    }

    fn filter(&self, mut predicate: impl FnMut(&User) -> bool) -> Vec<SharedUser> {
        self.users
            .values()
            .filter(|handle| handle.with(&mut predicate))
            .cloned()
            .collect()
    }
}
